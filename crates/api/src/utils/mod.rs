//! Handler support utilities.

pub mod logging;
