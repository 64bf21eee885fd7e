use super::Workbench;
use crate::kernel::{Action as KernelAction, Effect as KernelEffect};

impl Workbench {
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) {
        match effect {
            KernelEffect::LoadContent { tab_id, file_id } => {
                self.content_requests.push((tab_id, file_id));
            }
            KernelEffect::FlushPendingSave { file_id } => {
                if self.autosave.flush(&file_id).is_some() {
                    tracing::debug!(file = %file_id, "flushing pending save on close");
                }
            }
        }
    }
}
