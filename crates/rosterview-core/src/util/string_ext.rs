// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

pub trait StringExt {
    /// Compares the lowercase representations of two strings using the Unicode Collation
    /// Algorithm (CLDR root order), so that accented letters sort next to their base letters.
    fn cmp_ignore_case(&self, other: &str) -> Ordering;
    fn contains_ignore_case(&self, needle: &str) -> bool;
}

impl<T> StringExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn cmp_ignore_case(&self, other: &str) -> Ordering {
        let lhs = self.as_ref().to_lowercase();
        let rhs = other.to_lowercase();
        if lhs == rhs {
            return Ordering::Equal;
        }
        COLLATOR.with(|collator| collator.borrow_mut().collate(lhs.as_str(), rhs.as_str()))
    }

    fn contains_ignore_case(&self, needle: &str) -> bool {
        self.as_ref()
            .to_lowercase()
            .contains(needle.to_lowercase().as_str())
    }
}
