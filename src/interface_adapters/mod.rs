// Interface adapters: wire protocol, report rendering and the RNG adapter.

pub mod protocol;
pub mod report;
pub mod utils;
