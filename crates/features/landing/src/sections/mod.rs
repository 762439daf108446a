//! Page sections in their fixed top-to-bottom order.

mod about;
mod footer;
mod header;

pub use about::AboutSection;
pub use footer::Footer;
pub use header::Header;
