//! Per-frame update: offsets, wrap, focus and magnetic snap.

use carousel_animation::smooth_toward;
use carousel_ui_layout::AxisStrategy;

use crate::{Carousel, CarouselHost};

impl Carousel {
    /// Runs one frame. `delta_seconds` is the time since the previous frame.
    ///
    /// Does nothing before initialization has completed.
    pub fn update<H: CarouselHost>(&mut self, host: &mut H, delta_seconds: f32) {
        let Some(slots) = self.slots.as_mut() else {
            return;
        };
        let Some(content) = self.config.content else {
            return;
        };
        let axis = self.config.axis;

        self.viewport_size = axis.axis_size(host.viewport_rect());
        self.content_size = axis.axis_size(host.rect(content));

        let anchor = axis.scalar(host.viewport_position());
        let content_length = slots.len() as f32 * self.child_size;

        for index in 0..slots.len() {
            let node = slots.node(index);
            let offset = anchor - axis.scalar(host.position(node));
            slots.record(index, offset);

            if self.config.infinite {
                if offset > self.dest {
                    let mut anchored = host.anchored_position(node);
                    axis.shift_positive(&mut anchored, content_length);
                    host.set_anchored_position(node, anchored);
                }
                if offset < -self.dest {
                    let mut anchored = host.anchored_position(node);
                    axis.shift_negative(&mut anchored, content_length);
                    host.set_anchored_position(node, anchored);
                }
            }
        }

        for index in slots.nearest() {
            self.focused_index = index;
            self.focus_listeners.notify(index);
        }

        if self.config.magnetic && !self.drag.is_dragging() && !slots.is_empty() {
            let focused = slots.node(self.focused_index);
            let target = -axis.scalar(host.anchored_position(focused));
            let anchored = host.anchored_position(content);
            let next = smooth_toward(
                &axis.scalar(anchored),
                &target,
                delta_seconds,
                self.config.snap_rate,
            );
            host.set_anchored_position(content, axis.set_scalar(anchored, next));
        }
    }
}
