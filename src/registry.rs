use crate::error::DeckError;
use crate::tracker::DeckFrame;
use crate::transform::SlideTransform;

/// Something that can show a slide at a given transform.
pub trait SlideNode {
    fn apply(&mut self, transform: &SlideTransform);
}

/// Per-slide visual nodes, filled in as the view becomes ready.
///
/// Frames are applied to whatever is registered; empty slots are skipped and
/// catch up with the latest transform when their node arrives.
pub struct SlideRegistry<N: SlideNode> {
    nodes: Vec<Option<N>>,
    latest: Option<Vec<SlideTransform>>,
}

impl<N: SlideNode> SlideRegistry<N> {
    pub fn new(slide_count: usize) -> Self {
        Self {
            nodes: (0..slide_count).map(|_| None).collect(),
            latest: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.nodes.iter().all(Option::is_some)
    }

    pub fn get(&self, index: usize) -> Option<&N> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    pub fn register(&mut self, index: usize, mut node: N) -> Result<(), DeckError> {
        let count = self.nodes.len();
        let slot = self
            .nodes
            .get_mut(index)
            .ok_or(DeckError::SlideOutOfRange { index, count })?;

        if let Some(transform) = self.latest.as_ref().and_then(|t| t.get(index)) {
            node.apply(transform);
        }
        *slot = Some(node);
        Ok(())
    }

    /// Applies one frame to every registered node. Returns how many nodes
    /// received their transform.
    pub fn apply_frame(&mut self, frame: &DeckFrame) -> usize {
        let mut applied = 0;
        for (node, transform) in self.nodes.iter_mut().zip(&frame.transforms) {
            if let Some(node) = node {
                node.apply(transform);
                applied += 1;
            }
        }
        self.latest = Some(frame.transforms.clone());
        applied
    }

    /// Registered slides ordered back to front.
    pub fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<(i32, usize)> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_some())
            .map(|(index, _)| {
                let stack_order = self
                    .latest
                    .as_ref()
                    .and_then(|t| t.get(index))
                    .map_or(i32::MIN, |t| t.stack_order);
                (stack_order, index)
            })
            .collect();
        order.sort();
        order.into_iter().map(|(_, index)| index).collect()
    }
}
