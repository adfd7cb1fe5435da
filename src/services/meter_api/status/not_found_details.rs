use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct NotFoundDetails {
    pub name: String,
}

impl NotFoundDetails {
    pub fn new(name: String) -> Self {
        NotFoundDetails { name }
    }
}

impl Display for NotFoundDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "no meter named '{}'", self.name)
    }
}
