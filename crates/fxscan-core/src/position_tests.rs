use crate::position::{Position, locate};

fn at(row: u32, column: u32) -> Position {
    Position { row, column }
}

#[test]
fn start_of_buffer() {
    assert_eq!(locate("abc", 0), at(1, 1));
    assert_eq!(locate("", 0), at(1, 1));
}

#[test]
fn columns_advance_on_one_line() {
    assert_eq!(locate("abc", 2), at(1, 3));
}

#[test]
fn mixed_newline_pairs_count_once() {
    let source = "a\r\nb\n\rc";
    let b = source.find('b').unwrap();
    let c = source.find('c').unwrap();
    assert_eq!(locate(source, b), at(2, 1));
    assert_eq!(locate(source, c), at(3, 1));
}

#[test]
fn lone_carriage_returns_and_line_feeds() {
    let source = "a\rb\nc\n\nd";
    assert_eq!(locate(source, source.find('b').unwrap()), at(2, 1));
    assert_eq!(locate(source, source.find('c').unwrap()), at(3, 1));
    // `\n\n` is two units, not a pair
    assert_eq!(locate(source, source.find('d').unwrap()), at(5, 1));
}

#[test]
fn offset_past_end_clamps() {
    assert_eq!(locate("ab\ncd", 100), at(2, 3));
}

#[test]
fn display() {
    assert_eq!(at(3, 14).to_string(), "3,14");
}
