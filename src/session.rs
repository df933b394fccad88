use std::cell::RefCell;

pub type InternedStr = lasso::Spur;
pub type Interner = lasso::Rodeo;

/// Per-compilation state. A fresh session is created for each source unit,
/// so nothing leaks from one compilation into the next.
#[derive(Default)]
pub struct Session {
    interner: RefCell<Interner>,
}

impl Session {
    pub fn intern(&self, s: &str) -> InternedStr {
        self.interner.borrow_mut().get_or_intern(s)
    }

    pub fn lookup_str(&self, s: InternedStr) -> String {
        self.interner.borrow().resolve(&s).to_owned()
    }
}
