use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Select(usize),
    Next,
    Prev,
    Close,
}

impl LightboxAction {
    /// Keys the overlay reacts to while open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Carousel over a fixed number of images. Navigation wraps in both directions;
/// anything but `Select` while closed does nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Lightbox {
    state: LightboxState,
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            state: LightboxState::Closed,
            len,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected().is_some()
    }

    pub fn apply(&self, action: LightboxAction) -> LightboxState {
        match (self.state, action) {
            (_, LightboxAction::Select(index)) if index < self.len => LightboxState::Open(index),
            (LightboxState::Open(index), LightboxAction::Next) => LightboxState::Open((index + 1) % self.len),
            (LightboxState::Open(index), LightboxAction::Prev) => {
                LightboxState::Open((index + self.len - 1) % self.len)
            }
            (LightboxState::Open(_), LightboxAction::Close) => LightboxState::Closed,
            (state, _) => state,
        }
    }

    /// `"3 / 6"` style indicator, 1-based.
    pub fn position_label(&self) -> Option<String> {
        self.selected()
            .map(|index| format!("{} / {}", index + 1, self.item_count()))
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == self.state {
            return self;
        }
        Rc::new(Self {
            state: next,
            len: self.len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(len: usize, index: usize) -> Rc<Lightbox> {
        Rc::new(Lightbox::new(len)).reduce(LightboxAction::Select(index))
    }

    fn run(start: Rc<Lightbox>, actions: &[LightboxAction]) -> Rc<Lightbox> {
        actions.iter().fold(start, |lightbox, action| lightbox.reduce(*action))
    }

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::new(6);
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert_eq!(lightbox.position_label(), None);
    }

    #[test]
    fn next_and_prev_cycle_back_after_n_steps() {
        for len in 1..=7 {
            for start in 0..len {
                let forward = run(open_at(len, start), &vec![LightboxAction::Next; len]);
                assert_eq!(forward.state(), LightboxState::Open(start));

                let backward = run(open_at(len, start), &vec![LightboxAction::Prev; len]);
                assert_eq!(backward.state(), LightboxState::Open(start));
            }
        }
    }

    #[test]
    fn single_steps() {
        for index in 0..6 {
            let next = open_at(6, index).reduce(LightboxAction::Next);
            assert_eq!(next.state(), LightboxState::Open((index + 1) % 6));
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(open_at(6, 5).reduce(LightboxAction::Next).state(), LightboxState::Open(0));
        assert_eq!(open_at(6, 0).reduce(LightboxAction::Prev).state(), LightboxState::Open(5));
    }

    #[test]
    fn navigation_while_closed_is_ignored() {
        let closed = Rc::new(Lightbox::new(6));
        for action in [LightboxAction::Next, LightboxAction::Prev, LightboxAction::Close] {
            let after = closed.clone().reduce(action);
            assert_eq!(after.state(), LightboxState::Closed);
            assert!(Rc::ptr_eq(&after, &closed));
        }
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let closed = Rc::new(Lightbox::new(6));
        assert_eq!(closed.reduce(LightboxAction::Select(6)).state(), LightboxState::Closed);
        let open = open_at(6, 3).reduce(LightboxAction::Select(9));
        assert_eq!(open.state(), LightboxState::Open(3));
    }

    #[test]
    fn empty_gallery_cannot_open() {
        let empty = Rc::new(Lightbox::new(0)).reduce(LightboxAction::Select(0));
        assert!(!empty.is_open());
        assert_eq!(empty.reduce(LightboxAction::Next).state(), LightboxState::Closed);
    }

    #[test]
    fn keyboard_walkthrough() {
        let keys = ["ArrowRight", "ArrowRight", "ArrowLeft", "ArrowLeft", "ArrowLeft"];
        let actions: Vec<LightboxAction> = keys.iter().filter_map(|k| LightboxAction::from_key(k)).collect();

        let lightbox = run(open_at(6, 2), &actions[..2]);
        assert_eq!(lightbox.state(), LightboxState::Open(4));
        let lightbox = run(lightbox, &actions[2..]);
        assert_eq!(lightbox.state(), LightboxState::Open(1));
        assert_eq!(lightbox.position_label().as_deref(), Some("2 / 6"));

        let lightbox = lightbox.reduce(LightboxAction::from_key("Escape").unwrap());
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn unrelated_keys_do_nothing() {
        assert_eq!(LightboxAction::from_key("Enter"), None);
        assert_eq!(LightboxAction::from_key("a"), None);
    }

    #[test]
    fn label_counts_every_item() {
        let lightbox = open_at(4, 1);
        assert_eq!(lightbox.item_count(), 4);
        assert_eq!(lightbox.position_label().as_deref(), Some("2 / 4"));
    }

    #[test]
    fn position_label_is_one_based() {
        assert_eq!(open_at(6, 0).position_label().as_deref(), Some("1 / 6"));
        assert_eq!(open_at(6, 5).position_label().as_deref(), Some("6 / 6"));
    }
}
