//! Request dispatcher
//!
//! One dispatch cycle: run pre-dispatch hooks, look up the handler for
//! the (normalized) controller/action pair, invoke it. Exceptions go
//! through the exception hooks, which may redirect the cycle internally
//! to another handler. Forwarding is bounded so a misconfigured error
//! handler cannot loop forever.

use crate::dispatch::hooks::{DispatchCycle, DispatchHookChain, HookOutcome};
use appstrap_domain::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use tracing::{debug, warn};

/// Upper bound on internal forwards within one dispatch cycle
pub const MAX_DISPATCH_FORWARDS: usize = 8;

/// Dispatch failure codes the exception hooks branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchErrorCode {
    /// No controller registered under the requested name
    HandlerNotFound,
    /// Controller exists but has no such action
    ActionNotFound,
    /// Request could not be interpreted
    InvalidRequest,
    /// Handler raised an internal failure
    Internal,
}

/// Exception raised within a dispatch cycle
#[derive(Debug, Clone)]
pub struct DispatchException {
    /// Failure code the hooks branch on
    pub code: DispatchErrorCode,
    /// Human-readable description
    pub message: String,
}

impl DispatchException {
    /// Create an exception with an arbitrary code
    pub fn new<S: Into<String>>(code: DispatchErrorCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Controller lookup failure
    pub fn handler_not_found(controller: &str) -> Self {
        Self::new(
            DispatchErrorCode::HandlerNotFound,
            format!("Handler '{controller}' was not found"),
        )
    }

    /// Action lookup failure
    pub fn action_not_found(controller: &str, action: &str) -> Self {
        Self::new(
            DispatchErrorCode::ActionNotFound,
            format!("Action '{action}' was not found on handler '{controller}'"),
        )
    }
}

impl fmt::Display for DispatchException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for DispatchException {}

/// Handler invoked for a controller/action pair
pub type HandlerFn =
    Box<dyn Fn(&DispatchCycle) -> std::result::Result<String, DispatchException> + Send + Sync>;

/// Result of a completed dispatch cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Controller that actually handled the request (post-forwarding)
    pub controller: String,
    /// Action that actually handled the request (post-forwarding)
    pub action: String,
    /// Handler response body
    pub body: String,
}

/// State of the dispatch loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchState {
    /// First pass through the cycle
    Normal,
    /// Re-entered after an internal forward
    Forwarding,
}

/// Request dispatcher with an installed hook chain
pub struct Dispatcher {
    hooks: DispatchHookChain,
    handlers: RwLock<HashMap<String, HashMap<String, HandlerFn>>>,
}

impl Dispatcher {
    /// Create a dispatcher with the given hook chain and no handlers
    pub fn new(hooks: DispatchHookChain) -> Self {
        Self {
            hooks,
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a handler under canonical controller/action names
    pub fn register_handler<C, A, F>(&self, controller: C, action: A, handler: F)
    where
        C: Into<String>,
        A: Into<String>,
        F: Fn(&DispatchCycle) -> std::result::Result<String, DispatchException>
            + Send
            + Sync
            + 'static,
    {
        self.handlers
            .write()
            .expect("handler table lock poisoned")
            .entry(controller.into())
            .or_default()
            .insert(action.into(), Box::new(handler));
    }

    /// The installed hook chain
    pub fn hooks(&self) -> &DispatchHookChain {
        &self.hooks
    }

    /// Run one dispatch cycle for the requested controller/action pair
    ///
    /// Errors only when an exception goes unhandled by every hook or the
    /// forward bound is exceeded.
    pub fn dispatch<C: Into<String>, A: Into<String>>(
        &self,
        controller: C,
        action: A,
    ) -> Result<DispatchOutcome> {
        let mut cycle = DispatchCycle::new(controller, action);
        let mut state = DispatchState::Normal;

        for _ in 0..=MAX_DISPATCH_FORWARDS {
            self.hooks.run_pre_dispatch(&mut cycle);
            debug!(
                controller = %cycle.controller,
                action = %cycle.action,
                ?state,
                "Dispatching"
            );

            let exception = match self.invoke(&cycle) {
                Ok(body) => {
                    return Ok(DispatchOutcome {
                        controller: cycle.controller.clone(),
                        action: cycle.action.clone(),
                        body,
                    });
                }
                Err(exception) => exception,
            };

            match self.hooks.run_exception(&mut cycle, &exception) {
                HookOutcome::Handled => {
                    if let Some((next_controller, next_action)) = cycle.take_forward() {
                        cycle.controller = next_controller;
                        cycle.action = next_action;
                        state = DispatchState::Forwarding;
                        continue;
                    }
                    // Handled without a forward target: the hook ended the
                    // cycle with no response body.
                    debug!("Dispatch exception handled without forward");
                    return Ok(DispatchOutcome {
                        controller: cycle.controller.clone(),
                        action: cycle.action.clone(),
                        body: String::new(),
                    });
                }
                HookOutcome::Continue => {
                    return Err(Error::dispatch(exception.to_string()));
                }
            }
        }

        warn!(
            controller = %cycle.controller,
            action = %cycle.action,
            "Forward limit exceeded in dispatch cycle"
        );
        Err(Error::dispatch(format!(
            "Forward limit of {MAX_DISPATCH_FORWARDS} exceeded in one dispatch cycle"
        )))
    }

    fn invoke(&self, cycle: &DispatchCycle) -> std::result::Result<String, DispatchException> {
        let handlers = self.handlers.read().expect("handler table lock poisoned");
        let actions = handlers
            .get(&cycle.controller)
            .ok_or_else(|| DispatchException::handler_not_found(&cycle.controller))?;
        let handler = actions
            .get(&cycle.action)
            .ok_or_else(|| DispatchException::action_not_found(&cycle.controller, &cycle.action))?;
        handler(cycle)
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.read().expect("handler table lock poisoned");
        f.debug_struct("Dispatcher")
            .field("hooks", &self.hooks)
            .field("controllers", &handlers.len())
            .finish()
    }
}
