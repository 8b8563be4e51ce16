use crate::core::components::module::ModuleKind;
use crate::core::state::ModuleState;
use crate::core::types::{ModuleId, PulseLevel};

/// State transition for one delivered pulse.
///
/// Returns the level `module` forwards to all of its destinations, or `None`
/// when it stays silent. The only mutation goes through `state`.
pub fn apply(
    module: &ModuleId,
    kind: ModuleKind,
    incoming: PulseLevel,
    source: &ModuleId,
    state: &mut ModuleState,
) -> Option<PulseLevel> {
    match kind {
        ModuleKind::Broadcaster => Some(incoming),
        ModuleKind::Toggle => match incoming {
            PulseLevel::High => None,
            PulseLevel::Low => Some(PulseLevel::from(state.flip(module))),
        },
        ModuleKind::Detector => {
            if state.remember(module, source, incoming) {
                Some(PulseLevel::Low)
            } else {
                Some(PulseLevel::High)
            }
        }
        ModuleKind::Sink => None,
    }
}
