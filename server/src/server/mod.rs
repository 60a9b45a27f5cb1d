mod ctc_server;

pub use ctc_server::CtcServer;
