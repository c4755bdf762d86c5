//! Request dispatch with an explicit hook pipeline
//!
//! The dispatcher runs one dispatch cycle as a small state machine
//! (normal → forwarding) and invokes two well-defined hook points:
//! before handler lookup and on dispatch exception. Hooks are plain
//! ordered lists, not an open-ended event bus.
//!
//! ```text
//! dispatch(controller, action)
//!     │
//!     ▼
//! pre-dispatch hooks (name normalization, ...)
//!     │
//!     ▼
//! handler lookup + invocation ──ok──▶ DispatchOutcome
//!     │
//!   exception
//!     ▼
//! exception hooks ──Handled+forward──▶ re-enter cycle (bounded)
//!     │
//!   Continue
//!     ▼
//! error propagates to the caller
//! ```

pub mod dispatcher;
pub mod hooks;
pub mod text;

pub use dispatcher::{
    DispatchErrorCode, DispatchException, DispatchOutcome, Dispatcher, HandlerFn,
};
pub use hooks::{default_hook_chain, DispatchCycle, DispatchHookChain, HookOutcome};
pub use text::normalize_handler_name;
