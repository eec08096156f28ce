use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{DualChartEngine, PluginEvent};

impl<R: Renderer> DualChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            shared_transform: self.view.shared_x(),
            y_pans: self.view.y_pans(),
            sample_count: self
                .charts
                .values()
                .next()
                .map_or(0, |context| context.series().len()),
            hover: self.interaction.hover(),
            dragging: self.interaction.is_dragging(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
