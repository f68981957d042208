/// Render-loop tick metadata.
///
/// The hero globe animates per tick rather than per second (a fixed rotation
/// step each display refresh), so a frame is just its index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// 0-based frame index within one mount session.
    pub index: u64,
}

impl Frame {
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    pub fn next(self) -> Self {
        Self::new(self.index.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn default_frame_is_first() {
        assert_eq!(Frame::default(), Frame::new(0));
    }

    #[test]
    fn next_advances_index() {
        let f1 = Frame::new(0).next();
        assert_eq!(f1.index, 1);
        assert_eq!(Frame::new(u64::MAX).next().index, 0);
    }
}
