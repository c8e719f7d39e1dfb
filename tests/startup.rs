use hello_world::app::App;
use hello_world::hello::{self, HelloWorld, FORMAL_NAME, GREETING};
use hello_world::style::{Alignment, Direction, Padding};
use hello_world::Error;

#[test]
fn window_title_is_formal_name() {
    let mut app = hello::app();
    let title = app.start().unwrap().title().to_string();
    assert_eq!(title, FORMAL_NAME);
    assert_eq!(title, app.app().info().formal_name());
}

#[test]
fn content_holds_one_label() {
    let mut app = hello::app();
    let window = app.start().unwrap();
    assert!(window.is_visible());

    let content = window.content().unwrap();
    assert_eq!(content.len(), 1);
    let label = content.children()[0].as_label().unwrap();
    assert_eq!(label.text(), "Hello, Android!");
    assert_eq!(label.text(), GREETING);
}

#[test]
fn layout_style() {
    let window = HelloWorld::new().startup();
    let content = window.content().unwrap();

    let style = content.style();
    assert_eq!(style.get_direction(), Direction::Column);
    assert_eq!(style.cross_alignment(), Some(Alignment::Center));
    assert_eq!(style.get_padding(), Padding::uniform(20.0));

    let label_style = content.children()[0].style();
    assert_eq!(label_style.get_padding(), Padding::uniform(10.0));
}

#[test]
fn second_start_fails() {
    let mut app = hello::app();
    assert!(app.main_window().is_none());
    app.start().unwrap();
    assert!(matches!(app.start(), Err(Error::AlreadyStarted)));
    assert!(app.is_started());
}

#[test]
fn builds_kas_window() {
    let mut app = hello::app();
    let window = app.start().unwrap();
    assert!(hello_world::shell::build_window(window).is_ok());
}
