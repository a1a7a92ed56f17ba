// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Rearranges `children` into the order of `target` (a permutation of `children`) one move at
/// a time and returns the performed moves as `(child, from, to)`.
pub(crate) fn reorder<T: Copy + PartialEq>(children: &mut Vec<T>, target: &[T]) -> Vec<(T, usize, usize)> {
    let mut moves = vec![];

    for (to, child) in target.iter().enumerate() {
        let Some(from) = children
            .iter()
            .skip(to)
            .position(|c| c == child)
            .map(|offset| offset + to)
        else {
            continue;
        };

        if from == to {
            continue;
        }

        children.remove(from);
        children.insert(to, *child);
        moves.push((*child, from, to));
    }

    moves
}
