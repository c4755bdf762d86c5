//! Dispatch hook chain
//!
//! Ordered hook lists for the two dispatch hook points. Hooks execute in
//! registration order; a hook returning [`HookOutcome::Handled`]
//! short-circuits the remaining hooks for that event in the current
//! cycle.

use crate::dispatch::dispatcher::{DispatchErrorCode, DispatchException};
use crate::dispatch::text::normalize_handler_name;
use appstrap_domain::constants::{
    ERROR_ACTION_NOT_FOUND, ERROR_ACTION_UNCAUGHT, ERROR_CONTROLLER,
};
use tracing::debug;

/// Outcome signalled by a hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Let later hooks (and default processing) continue
    Continue,
    /// Short-circuit: the hook took responsibility for this event
    Handled,
}

/// Mutable state of one dispatch cycle, as seen by hooks
///
/// Pre-dispatch hooks may rewrite the requested names; exception hooks
/// may request an internal forward, which re-enters the same cycle
/// without issuing a new outward response.
#[derive(Debug, Clone)]
pub struct DispatchCycle {
    /// Requested (or rewritten) controller name
    pub controller: String,
    /// Requested (or rewritten) action name
    pub action: String,
    forward: Option<(String, String)>,
}

impl DispatchCycle {
    /// Start a cycle for the requested names
    pub fn new<C: Into<String>, A: Into<String>>(controller: C, action: A) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            forward: None,
        }
    }

    /// Redirect the current cycle to another handler/action
    pub fn forward<C: Into<String>, A: Into<String>>(&mut self, controller: C, action: A) {
        self.forward = Some((controller.into(), action.into()));
    }

    /// Take the pending forward target, if a hook set one
    pub(crate) fn take_forward(&mut self) -> Option<(String, String)> {
        self.forward.take()
    }
}

/// Hook invoked before handler lookup
pub type PreDispatchHook = Box<dyn Fn(&mut DispatchCycle) -> HookOutcome + Send + Sync>;

/// Hook invoked when dispatch raises an exception
pub type ExceptionHook =
    Box<dyn Fn(&mut DispatchCycle, &DispatchException) -> HookOutcome + Send + Sync>;

/// Ordered hook lists for the dispatcher's two hook points
#[derive(Default)]
pub struct DispatchHookChain {
    pre_hooks: Vec<PreDispatchHook>,
    exception_hooks: Vec<ExceptionHook>,
}

impl DispatchHookChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-dispatch hook
    pub fn on_pre_dispatch<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut DispatchCycle) -> HookOutcome + Send + Sync + 'static,
    {
        self.pre_hooks.push(Box::new(hook));
        self
    }

    /// Append a dispatch-exception hook
    pub fn on_exception<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut DispatchCycle, &DispatchException) -> HookOutcome + Send + Sync + 'static,
    {
        self.exception_hooks.push(Box::new(hook));
        self
    }

    /// Run the pre-dispatch hooks in registration order
    pub fn run_pre_dispatch(&self, cycle: &mut DispatchCycle) -> HookOutcome {
        for hook in &self.pre_hooks {
            if hook(cycle) == HookOutcome::Handled {
                return HookOutcome::Handled;
            }
        }
        HookOutcome::Continue
    }

    /// Run the exception hooks in registration order
    ///
    /// Returns `Handled` as soon as one hook takes responsibility.
    pub fn run_exception(
        &self,
        cycle: &mut DispatchCycle,
        exception: &DispatchException,
    ) -> HookOutcome {
        for hook in &self.exception_hooks {
            if hook(cycle, exception) == HookOutcome::Handled {
                return HookOutcome::Handled;
            }
        }
        HookOutcome::Continue
    }

    /// Number of registered hooks, for diagnostics
    pub fn len(&self) -> usize {
        self.pre_hooks.len() + self.exception_hooks.len()
    }

    /// Whether no hooks are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for DispatchHookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchHookChain")
            .field("pre_dispatch", &self.pre_hooks.len())
            .field("on_exception", &self.exception_hooks.len())
            .finish()
    }
}

/// Build the chain the bootstrapper installs on every dispatcher
///
/// 1. Pre-dispatch normalization: controller and action names are
///    rewritten to their canonical camel-case identifiers before
///    handler lookup, unconditionally.
/// 2. Exception forwarding: handler/action-not-found always forwards to
///    the error controller's not-found action; any other code forwards
///    to the uncaught-exception action only in debug mode, and
///    otherwise leaves default propagation to run.
pub fn default_hook_chain(debug_mode: bool) -> DispatchHookChain {
    let mut chain = DispatchHookChain::new();

    chain.on_pre_dispatch(|cycle| {
        cycle.controller = normalize_handler_name(&cycle.controller);
        cycle.action = normalize_handler_name(&cycle.action);
        HookOutcome::Continue
    });

    chain.on_exception(move |cycle, exception| match exception.code {
        DispatchErrorCode::HandlerNotFound | DispatchErrorCode::ActionNotFound => {
            debug!(code = ?exception.code, "Forwarding dispatch failure to error handler");
            cycle.forward(ERROR_CONTROLLER, ERROR_ACTION_NOT_FOUND);
            HookOutcome::Handled
        }
        _ if debug_mode => {
            debug!(code = ?exception.code, "Debug mode: forwarding uncaught dispatch exception");
            cycle.forward(ERROR_CONTROLLER, ERROR_ACTION_UNCAUGHT);
            HookOutcome::Handled
        }
        _ => HookOutcome::Continue,
    });

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_run_in_registration_order_and_short_circuit() {
        let mut chain = DispatchHookChain::new();
        chain.on_pre_dispatch(|cycle| {
            cycle.controller.push('a');
            HookOutcome::Continue
        });
        chain.on_pre_dispatch(|cycle| {
            cycle.controller.push('b');
            HookOutcome::Handled
        });
        chain.on_pre_dispatch(|cycle| {
            cycle.controller.push('c');
            HookOutcome::Continue
        });

        let mut cycle = DispatchCycle::new("", "index");
        assert_eq!(chain.run_pre_dispatch(&mut cycle), HookOutcome::Handled);
        assert_eq!(cycle.controller, "ab");
    }

    #[test]
    fn default_chain_normalizes_names() {
        let chain = default_hook_chain(false);
        let mut cycle = DispatchCycle::new("user_profile", "edit_item");
        chain.run_pre_dispatch(&mut cycle);

        assert_eq!(cycle.controller, "userProfile");
        assert_eq!(cycle.action, "editItem");
    }

    #[test]
    fn not_found_forwards_regardless_of_debug_mode() {
        for debug_mode in [false, true] {
            let chain = default_hook_chain(debug_mode);
            let mut cycle = DispatchCycle::new("user", "missing");
            let exception = DispatchException::action_not_found("user", "missing");

            assert_eq!(
                chain.run_exception(&mut cycle, &exception),
                HookOutcome::Handled
            );
            assert_eq!(
                cycle.take_forward(),
                Some(("error".to_string(), "notFoundException".to_string()))
            );
        }
    }

    #[test]
    fn other_codes_forward_only_in_debug_mode() {
        let exception = DispatchException::new(DispatchErrorCode::Internal, "boom");

        let chain = default_hook_chain(true);
        let mut cycle = DispatchCycle::new("user", "index");
        assert_eq!(chain.run_exception(&mut cycle, &exception), HookOutcome::Handled);
        assert_eq!(
            cycle.take_forward(),
            Some(("error".to_string(), "uncaughtException".to_string()))
        );

        let chain = default_hook_chain(false);
        let mut cycle = DispatchCycle::new("user", "index");
        assert_eq!(chain.run_exception(&mut cycle, &exception), HookOutcome::Continue);
        assert_eq!(cycle.take_forward(), None);
    }
}
