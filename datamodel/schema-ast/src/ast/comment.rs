/// A comment. The docs attached to a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
}
