use crate::board::grid::Coord;

pub type NodeId = u32;

/// One link of a best-continuation chain. `tail` is the id of the chain's
/// last node and is only meaningful on chain heads; it lets `release`
/// splice a whole chain onto the free list without traversal.
#[derive(Clone, Copy, Debug)]
struct MoveRecord {
    coord: Coord,
    next: Option<NodeId>,
    tail: NodeId,
}

/// Index-addressed arena of move records with an intrusive free list.
/// Chains built during one search are recycled here instead of going
/// back to the system allocator.
#[derive(Default)]
pub struct ChainPool {
    nodes: Vec<MoveRecord>,
    free_head: Option<NodeId>,
}

impl ChainPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// New chain head `coord` prepended to `next` (None for a leaf).
    /// Reuses a recycled node when one is available. O(1).
    pub fn acquire(&mut self, coord: Coord, next: Option<NodeId>) -> NodeId {
        let id = match self.free_head {
            Some(id) => {
                self.free_head = self.nodes[id as usize].next;
                id
            }
            None => {
                let id = self.nodes.len() as NodeId;
                self.nodes.push(MoveRecord {
                    coord,
                    next: None,
                    tail: id,
                });
                id
            }
        };
        let tail = match next {
            Some(child) => self.nodes[child as usize].tail,
            None => id,
        };
        self.nodes[id as usize] = MoveRecord { coord, next, tail };
        id
    }

    /// Splice an entire chain onto the free list in O(1) via the head's
    /// tail index. None is a no-op.
    pub fn release(&mut self, head: Option<NodeId>) {
        let Some(head) = head else { return };
        let tail = self.nodes[head as usize].tail;
        self.nodes[tail as usize].next = self.free_head;
        self.free_head = Some(head);
    }

    pub fn coord(&self, id: NodeId) -> Coord {
        self.nodes[id as usize].coord
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id as usize].next
    }

    /// Materialize a chain front-to-back.
    pub fn line(&self, head: Option<NodeId>) -> Vec<Coord> {
        let mut out = Vec::new();
        let mut cursor = head;
        while let Some(id) = cursor {
            out.push(self.coord(id));
            cursor = self.next(id);
        }
        out
    }

    /// Total records ever allocated from the system (live + recycled).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
