use binds::binds::BindActionsHud;
use client_types::block::BlockId;
use egui::{pos2, vec2, Color32, Rect};
use graphics::{
    graphics::graphics::Graphics,
    handles::{canvas::canvas::WindowProps, stream::stream::GraphicsStreamHandle},
};
use input_binds::binds::BindKey;

use crate::types::{HudPipe, HudWidgetInterface};

pub const SLOT_COUNT: usize = 9;
pub const SLOT_SIZE: f32 = 32.0;
pub const SLOT_PADDING: f32 = 4.0;
pub const BOTTOM_MARGIN: f32 = 4.0;
pub const SELECTION_THICKNESS: f32 = 2.0;

/// Flat preview colour of a block.
pub fn block_color(block: BlockId) -> Color32 {
    match block {
        BlockId::STONE => Color32::from_rgb(125, 125, 125),
        BlockId::GRASS => Color32::from_rgb(95, 159, 53),
        BlockId::DIRT => Color32::from_rgb(134, 96, 67),
        BlockId::COBBLESTONE => Color32::from_rgb(100, 100, 100),
        BlockId::WOOD => Color32::from_rgb(157, 128, 79),
        BlockId::SAND => Color32::from_rgb(219, 211, 160),
        BlockId::LOG => Color32::from_rgb(102, 81, 51),
        BlockId::LEAVES => Color32::from_rgb(60, 120, 30),
        BlockId::BRICK => Color32::from_rgb(150, 74, 58),
        BlockId(id) => Color32::from_rgb(
            id.wrapping_mul(53),
            id.wrapping_mul(97),
            id.wrapping_mul(151),
        ),
    }
}

/// The block selection bar at the bottom of the screen.
pub struct BlockHotbar {
    stream_handle: GraphicsStreamHandle,
    window: WindowProps,

    blocks: [BlockId; SLOT_COUNT],
    selected: usize,
}

impl BlockHotbar {
    pub fn new(graphics: &Graphics) -> Self {
        Self {
            stream_handle: graphics.stream_handle.clone(),
            window: graphics.canvas_handle.window_props(),

            blocks: BlockId::DEFAULT_HOTBAR,
            selected: 0,
        }
    }

    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    pub fn selected_block(&self) -> BlockId {
        self.blocks[self.selected]
    }

    pub fn set_block(&mut self, slot: usize, block: BlockId) {
        if let Some(cur) = self.blocks.get_mut(slot) {
            *cur = block;
        }
    }

    pub fn bar_rect(&self) -> Rect {
        let width = SLOT_COUNT as f32 * SLOT_SIZE + (SLOT_COUNT + 1) as f32 * SLOT_PADDING;
        let height = SLOT_SIZE + SLOT_PADDING * 2.0;
        Rect::from_min_size(
            pos2(
                (self.window.window_width as f32 - width) / 2.0,
                self.window.window_height as f32 - BOTTOM_MARGIN - height,
            ),
            vec2(width, height),
        )
    }

    pub fn slot_rect(&self, slot: usize) -> Rect {
        let bar = self.bar_rect();
        Rect::from_min_size(
            pos2(
                bar.min.x + SLOT_PADDING + slot as f32 * (SLOT_SIZE + SLOT_PADDING),
                bar.min.y + SLOT_PADDING,
            ),
            vec2(SLOT_SIZE, SLOT_SIZE),
        )
    }
}

impl HudWidgetInterface for BlockHotbar {
    fn render(&mut self, _pipe: &HudPipe) {
        self.stream_handle
            .render_quad(self.bar_rect(), Color32::from_black_alpha(150));
        for (slot, block) in self.blocks.iter().enumerate() {
            self.stream_handle
                .render_quad(self.slot_rect(slot), block_color(*block));
        }
        self.stream_handle.render_rect_outline(
            self.slot_rect(self.selected)
                .expand(SELECTION_THICKNESS + SLOT_PADDING / 2.0),
            SELECTION_THICKNESS,
            Color32::WHITE,
        );
    }

    fn on_resize(&mut self, _old: WindowProps, new: WindowProps) {
        self.window = new;
    }

    fn handle_key_down(&mut self, pipe: &HudPipe, _key: &BindKey) -> bool {
        let slot = pipe.input.actions.iter().find_map(|action| match action {
            BindActionsHud::SelectSlot(slot) => Some(*slot as usize),
            _ => None,
        });
        match slot {
            Some(slot) if slot < self.blocks.len() => {
                self.selected = slot;
                log::trace!(target: "hotbar", "selected slot {slot}: {:?}", self.blocks[slot]);
                true
            }
            _ => false,
        }
    }
}
