use tracing::{debug, warn};

use crate::core::{ChartSnapshot, DimensionReconciler};
use crate::error::ChartResult;
use crate::host::EditorHost;
use crate::interaction::DragState;
use crate::render::Renderer;

use super::{
    ChartEditor, ChartEditorConfig, editor_state::EditorState, layout_observer::LayoutObserver,
    render_style::RenderStyle, sync_gate::{SnapshotKey, SyncGate},
};

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    /// Creates an editor holding the built-in defaults.
    ///
    /// The defaults are taken as the host's baseline, so construction itself
    /// never commits. Resize observation starts immediately.
    pub fn new(renderer: R, mut host: H, config: ChartEditorConfig) -> ChartResult<Self> {
        let config = config.validated()?;
        let self_display_name = config
            .self_display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);

        let mut state = EditorState::new(config.height_px, config.y_step);
        let mut reconciler = DimensionReconciler::default();
        let mut defaults = ChartSnapshot::defaults(self_display_name.as_deref());
        defaults.y_step = config.y_step.as_option();
        state.overwrite_from(defaults);
        let feature_count = state.features.len();
        reconciler.reconcile(
            state.entities.values_mut(),
            feature_count,
            state.min_y,
            state.max_y,
        );

        let baseline = match SnapshotKey::of(&state.to_snapshot()) {
            Ok(key) => Some(key),
            Err(err) => {
                warn!(error = %err, "starting without an outbound baseline");
                None
            }
        };

        let mut layout = LayoutObserver::new(config.full_screen, config.initial_width_px);
        host.observe_resize(layout.start());

        debug!(
            feature_count,
            full_screen = config.full_screen,
            height_px = state.height_px,
            "chart editor initialized"
        );

        Ok(Self {
            renderer,
            host,
            config,
            render_style: RenderStyle::default(),
            state,
            reconciler,
            sync: SyncGate::new(baseline),
            drag: DragState::default(),
            layout,
            self_display_name,
            external_applied: false,
            torn_down: false,
        })
    }
}
