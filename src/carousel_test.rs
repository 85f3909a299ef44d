use super::*;

#[test]
fn empty_carousel_is_rejected() {
    assert!(CarouselState::new(0).is_none());
}

#[test]
fn starts_on_first_slide() {
    let state = CarouselState::new(3).expect("three slides");
    assert_eq!(state.index(), 0);
    assert_eq!(state.len(), 3);
    assert!(!state.is_empty());
}

#[test]
fn next_wraps_to_first() {
    let mut state = CarouselState::new(3).expect("three slides");
    assert_eq!(state.apply(CarouselCommand::Next), Some(1));
    assert_eq!(state.apply(CarouselCommand::Next), Some(2));
    assert_eq!(state.apply(CarouselCommand::Next), Some(0));
}

#[test]
fn prev_wraps_to_last() {
    let mut state = CarouselState::new(4).expect("four slides");
    assert_eq!(state.apply(CarouselCommand::Prev), Some(3));
    assert_eq!(state.apply(CarouselCommand::Prev), Some(2));
}

#[test]
fn tick_advances_like_next() {
    let mut state = CarouselState::new(2).expect("two slides");
    assert_eq!(state.apply(CarouselCommand::Tick), Some(1));
    assert_eq!(state.apply(CarouselCommand::Tick), Some(0));
}

#[test]
fn single_slide_stays_put() {
    let mut state = CarouselState::new(1).expect("one slide");
    assert_eq!(state.apply(CarouselCommand::Next), Some(0));
    assert_eq!(state.apply(CarouselCommand::Prev), Some(0));
}

#[test]
fn go_to_out_of_range_is_ignored() {
    let mut state = CarouselState::new(3).expect("three slides");
    state.apply(CarouselCommand::GoTo(2));
    assert_eq!(state.apply(CarouselCommand::GoTo(3)), None);
    assert_eq!(state.index(), 2);
}

#[test]
fn slides_mark_only_current_active() {
    let mut state = CarouselState::new(3).expect("three slides");
    state.apply(CarouselCommand::GoTo(1));
    let views = state.slides().collect::<Vec<_>>();
    assert_eq!(views.len(), 3);
    assert!(!views[0].active);
    assert!(views[1].active);
    assert_eq!(views[1].display, "grid");
    assert_eq!(views[1].aria_hidden, "false");
    assert_eq!(views[2].display, "none");
    assert_eq!(views[2].aria_hidden, "true");
}

#[test]
fn keys_map_to_commands() {
    assert_eq!(CarouselCommand::from_key("ArrowLeft"), Some(CarouselCommand::Prev));
    assert_eq!(CarouselCommand::from_key("ArrowRight"), Some(CarouselCommand::Next));
    assert_eq!(CarouselCommand::from_key("Home"), Some(CarouselCommand::GoTo(0)));
    assert_eq!(CarouselCommand::from_key("Enter"), None);
}

#[test]
fn only_tick_is_not_user_initiated() {
    assert!(!CarouselCommand::Tick.is_user_initiated());
    assert!(CarouselCommand::Next.is_user_initiated());
    assert!(CarouselCommand::GoTo(0).is_user_initiated());
}

#[test]
fn autoplay_hold_pauses_on_any_reason() {
    assert!(!AutoplayHold::default().is_paused());
    assert!(AutoplayHold { hovered: true, ..AutoplayHold::default() }.is_paused());
    assert!(AutoplayHold { focused: true, ..AutoplayHold::default() }.is_paused());
    assert!(AutoplayHold { reduced_motion: true, ..AutoplayHold::default() }.is_paused());
}

#[test]
fn dot_labels_are_one_based() {
    assert_eq!(dot_label(0), "Go to slide 1");
    assert_eq!(dot_label(4), "Go to slide 5");
}
