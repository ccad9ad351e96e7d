mod session;

pub use session::{RunState, Session, SessionEvent};
