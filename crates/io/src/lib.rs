#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

mod lenient;
mod logging;
mod prompt;
mod significant;

pub use self::{lenient::*, logging::*, prompt::*, significant::*};
