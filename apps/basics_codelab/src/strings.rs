pub const WELCOME: &str = "Welcome to the Basic Codelab!";
pub const CONTINUE: &str = "Continue";
pub const HELLO: &str = "Hello, ";
pub const SHOW_MORE: &str = "Show more";
pub const SHOW_LESS: &str = "Show less";
