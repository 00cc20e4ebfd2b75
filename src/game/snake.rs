use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's body: a head plus a tail that trails behind it.
///
/// All positions are cells of the board, 1-indexed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the segments of the snake's tail, nearest the head
    /// first.
    ///
    /// Immediately after [`Snake::grow()`] this holds one fewer segment than
    /// `len`; the missing segment is filled in by the next
    /// [`Snake::advance()`].
    pub(super) tail: VecDeque<Position>,

    /// The logical length of the tail
    pub(super) len: usize,
}

impl Snake {
    /// Create a new snake with its head at `head` and no tail
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            head,
            tail: VecDeque::new(),
            len: 0,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return the positions of the tail segments that have been laid down so
    /// far, nearest the head first
    pub(super) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.tail.iter().copied()
    }

    /// Return the logical length of the tail, counting a segment gained from
    /// [`Snake::grow()`] that has not been laid down yet
    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Is `pos` covered by the head or any tail segment?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.tail.contains(&pos)
    }

    /// Is `pos` covered by a tail segment?  The head does not count.
    pub(super) fn self_collides(&self, pos: Position) -> bool {
        self.tail.contains(&pos)
    }

    /// Move the head to `new_head`.  The cell the head is leaving becomes the
    /// segment nearest the head, and the oldest segment is dropped if the
    /// tail would otherwise exceed its length.
    pub(super) fn advance(&mut self, new_head: Position) {
        // The old head has to be captured before it is overwritten.
        self.tail.push_front(self.head);
        self.tail.truncate(self.len);
        self.head = new_head;
    }

    /// Lengthen the tail by one segment in response to eating food
    pub(super) fn grow(&mut self) {
        self.len += 1;
    }
}
