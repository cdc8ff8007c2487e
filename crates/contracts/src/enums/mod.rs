pub mod disclosure;

pub use disclosure::{Disclosure, MenuLevel, MenuTrigger};
