use super::Scroll;

fn create_scroll(list_length: usize, viewport_length: usize) -> Scroll {
    let mut scroll = Scroll::default();
    scroll.set_state(list_length, viewport_length);
    return scroll;
}

#[test]
fn it_does_not_scroll_short_content() {
    let mut scroll = create_scroll(5, 20);

    scroll.down();
    scroll.down_page();
    assert_eq!(scroll.position, 0);

    scroll.last();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_to_the_last_line() {
    let mut scroll = create_scroll(30, 20);

    scroll.down_page();
    scroll.down_page();

    assert_eq!(scroll.position, 10);
}

#[test]
fn it_scrolls_back_up() {
    let mut scroll = create_scroll(50, 20);

    scroll.last();
    assert_eq!(scroll.position, 30);

    scroll.up();
    assert_eq!(scroll.position, 29);

    scroll.up_page();
    scroll.up_page();
    scroll.up_page();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_when_content_shrinks() {
    let mut scroll = create_scroll(50, 20);
    scroll.last();

    scroll.set_state(25, 20);

    assert_eq!(scroll.position, 5);
}

#[test]
fn it_resets_to_first() {
    let mut scroll = create_scroll(50, 20);
    scroll.down_page();

    scroll.first();

    assert_eq!(scroll.position, 0);
    assert_eq!(scroll.offset(), 0);
}
