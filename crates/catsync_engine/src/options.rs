//! Diff options.

/// How positional changes in image lists are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageReorder {
    /// Emit `moveImage` actions with the image's target position.
    #[default]
    Move,
    /// Emit remove-then-add pairs, for platforms without a move action.
    RemoveAdd,
}

/// Options for a diff run.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Image reorder semantics.
    pub image_reorder: ImageReorder,
}

impl DiffOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image reorder semantics.
    pub fn with_image_reorder(mut self, mode: ImageReorder) -> Self {
        self.image_reorder = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reorder_is_move() {
        assert_eq!(DiffOptions::new().image_reorder, ImageReorder::Move);
        let opts = DiffOptions::new().with_image_reorder(ImageReorder::RemoveAdd);
        assert_eq!(opts.image_reorder, ImageReorder::RemoveAdd);
    }
}
