use crate::geom::Region;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Solid fill of an analytic region.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub region: Region,
    pub color: Color,
}

impl FillCmd {
    #[inline]
    pub fn new(region: Region, color: Color) -> Self {
        Self { region, color }
    }
}

impl DrawList {
    /// Records a solid fill. Empty regions are dropped.
    #[inline]
    pub fn push_fill(&mut self, region: Region, color: Color) {
        if region.is_empty() {
            return;
        }
        self.push(DrawCmd::Fill(FillCmd::new(region, color)));
    }
}
