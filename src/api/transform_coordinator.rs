use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{ChartId, LinearScale};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ZoomEvent;
use crate::render::Renderer;

use super::grid_renderer::{render_axes, render_grid};
use super::hover_coordinator::HoverCoordinator;
use super::{DualChartEngine, PluginEvent};

pub(super) struct TransformCoordinator;

impl TransformCoordinator {
    pub(super) fn on_zoom_start<R: Renderer>(engine: &mut DualChartEngine<R>, chart: ChartId) {
        engine.interaction.on_drag_start(chart);
        HoverCoordinator::set_hover_visible(engine, false);
    }

    pub(super) fn on_zoom_end<R: Renderer>(engine: &mut DualChartEngine<R>, chart: ChartId) {
        engine.interaction.on_drag_end(chart);
    }

    /// Folds one zoom event into the shared view and redraws both charts.
    ///
    /// Events arriving while a recompute runs are the overlays echoing their
    /// programmatic transforms; they are counted and dropped.
    pub(super) fn on_zoom_event<R: Renderer>(
        engine: &mut DualChartEngine<R>,
        event: ZoomEvent,
    ) -> ChartResult<()> {
        if engine.view.is_recomputing() {
            engine.view.note_suppressed();
            trace!(chart = ?event.chart, source = ?event.source, "zoom event swallowed during recompute");
            return Ok(());
        }
        if !event.transform.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom transform must be finite with k > 0".to_owned(),
            ));
        }

        let extent = engine.config.scale_extent;
        let previous = engine.view;
        engine.view.apply_zoom(event.chart, event.transform, extent);
        if let Err(err) = Self::recompute(engine) {
            engine.view = previous;
            debug!(chart = ?event.chart, error = %err, "zoom rejected; view restored");
            return Err(err);
        }

        let transform = engine.view.combined(event.chart);
        engine.emit_plugin_event(PluginEvent::ZoomChanged {
            chart: event.chart,
            transform,
        });
        Ok(())
    }

    /// Re-derives scales from the view state and redraws everything that
    /// depends on them.
    pub(super) fn recompute<R: Renderer>(engine: &mut DualChartEngine<R>) -> ChartResult<()> {
        if !ChartId::ALL
            .iter()
            .all(|chart| engine.charts.contains_key(chart))
        {
            debug!("skipping transform recompute: chart contexts are not built yet");
            return Ok(());
        }
        if !engine.view.begin_recompute() {
            return Ok(());
        }

        let result = Self::redraw_charts(engine).and_then(|echoes| {
            for echo in echoes {
                Self::on_zoom_event(engine, echo)?;
            }
            Ok(())
        });
        engine.view.end_recompute();
        result
    }

    fn redraw_charts<R: Renderer>(
        engine: &mut DualChartEngine<R>,
    ) -> ChartResult<SmallVec<[ZoomEvent; 2]>> {
        let style = engine.config.style;
        let tick_count = engine.config.tick_count;
        let mut echoes = SmallVec::new();

        // Both charts must rescale cleanly before either scene changes.
        let mut rescaled: SmallVec<[(ChartId, (LinearScale, LinearScale)); 2]> = SmallVec::new();
        for chart in ChartId::ALL {
            if let Some(context) = engine.charts.get(&chart) {
                rescaled.push((chart, context.rescaled(engine.view.combined(chart))?));
            }
        }

        for (chart, scales) in rescaled {
            let combined = engine.view.combined(chart);
            let Some(context) = engine.charts.get_mut(&chart) else {
                continue;
            };
            context.set_scales(scales);

            let (width, height) = context.plot_size();
            let (x_scale, y_scale) = (context.x_scale, context.y_scale);
            render_axes(&mut context.scene, x_scale, y_scale, height, tick_count, &style);
            render_grid(
                &mut context.scene,
                x_scale,
                y_scale,
                width,
                height,
                tick_count,
                &style,
            );
            context.sync_series_path(&style);
            context.sync_sign_regions(&style);

            echoes.push(context.overlay.set_transform(combined)?);
        }

        Ok(echoes)
    }
}
