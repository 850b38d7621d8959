use tracing::{debug, trace, warn};

use crate::core::{EntityId, round_to_cents};
use crate::host::EditorHost;
use crate::interaction::{DragTarget, InteractionMode, ThrottleDecision};
use crate::render::Renderer;

use super::ChartEditor;

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    #[must_use]
    pub fn interaction_mode(&self) -> &InteractionMode {
        self.drag.mode()
    }

    /// Rendered point under `(x, y)`, if any.
    ///
    /// Only visible entities are considered; on overlap the nearest point
    /// wins, and on a tie the entity drawn last (topmost) wins.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<DragTarget> {
        let geometry = self.geometry().ok()?;
        let radius = self.config.hit_radius_px;
        let mut best: Option<(f64, DragTarget)> = None;
        for entity in self.state.entities.values().filter(|e| e.visible) {
            for (index, value) in entity.values.iter().enumerate() {
                let dx = geometry.x_for_index(index) - x;
                let dy = geometry.y_for_value(*value) - y;
                let distance = dx.hypot(dy);
                if distance > radius {
                    continue;
                }
                if best.as_ref().is_none_or(|(d, _)| distance <= *d) {
                    best = Some((distance, DragTarget::new(entity.id.clone(), index)));
                }
            }
        }
        best.map(|(_, target)| target)
    }

    /// Pointer pressed at `(x, y)`; starts a drag when it lands on a point.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<DragTarget> {
        if self.torn_down {
            return None;
        }
        let target = self.hit_test(x, y)?;
        self.start_drag(target.clone());
        Some(target)
    }

    /// Starts dragging a known point directly (e.g. keyboard or accessibility
    /// handles). Returns `false` and stays idle when the point does not exist.
    pub fn begin_drag(&mut self, entity_id: &EntityId, feature_index: usize) -> bool {
        if self.torn_down {
            return false;
        }
        let exists = self
            .state
            .entities
            .get(entity_id)
            .is_some_and(|entity| entity.visible && feature_index < entity.values.len());
        if !exists {
            trace!(id = %entity_id, feature_index, "drag target not found");
            return false;
        }
        self.start_drag(DragTarget::new(entity_id.clone(), feature_index));
        true
    }

    /// Pointer moved; the value update is deferred to the next frame and
    /// coalesced with any other moves before it.
    pub fn pointer_move(&mut self, pixel_y: f64) {
        if self.torn_down || !pixel_y.is_finite() {
            return;
        }
        if let Some(ThrottleDecision::RequestFrame) = self.drag.on_pointer_move(pixel_y) {
            let frame = self.host.request_animation_frame();
            self.drag.arm_frame(frame);
        }
    }

    /// Pointer released anywhere: commits the last move and goes idle.
    pub fn pointer_up(&mut self) {
        if self.torn_down {
            return;
        }
        let (last, frame) = self.drag.on_pointer_up();
        if let Some(frame) = frame {
            self.host.cancel_animation_frame(frame);
        }
        if let Some((target, pixel_y)) = last {
            self.apply_drag_pixel(&target, pixel_y);
        }
        debug!("drag finished");
    }

    fn start_drag(&mut self, target: DragTarget) {
        self.cancel_drag();
        debug!(id = %target.entity_id, feature_index = target.feature_index, "drag started");
        self.drag.on_pointer_down(target);
    }

    pub(super) fn cancel_drag(&mut self) {
        if let Some(frame) = self.drag.reset() {
            self.host.cancel_animation_frame(frame);
        }
    }

    /// Writes the value under `pixel_y` into the dragged point.
    pub(super) fn apply_drag_pixel(&mut self, target: &DragTarget, pixel_y: f64) {
        let geometry = match self.geometry() {
            Ok(geometry) => geometry,
            Err(err) => {
                warn!(error = %err, "skipping drag update without a usable layout");
                return;
            }
        };
        let value = round_to_cents(geometry.value_for_y(pixel_y));

        let Some(slot) = self
            .state
            .entities
            .get_mut(&target.entity_id)
            .and_then(|entity| entity.values.get_mut(target.feature_index))
        else {
            debug!(id = %target.entity_id, feature_index = target.feature_index, "drag target lost");
            self.cancel_drag();
            return;
        };
        if *slot == value {
            return;
        }
        *slot = value;
        trace!(value, feature_index = target.feature_index, "drag value");
        self.commit_local_change();
    }
}
