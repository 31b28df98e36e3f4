use crate::utils::message::COLOR_CHAR;
use crate::utils::{colorize, strip_colors};

#[test]
fn test_colorize_translates_valid_codes() {
    assert_eq!(colorize("&aGreen"), format!("{}aGreen", COLOR_CHAR));
    assert_eq!(colorize("&Lbold"), format!("{}lbold", COLOR_CHAR));
    assert_eq!(colorize("&7A &fB"), format!("{0}7A {0}fB", COLOR_CHAR));
}

#[test]
fn test_colorize_leaves_other_ampersands() {
    assert_eq!(colorize("Tom & Jerry"), "Tom & Jerry");
    assert_eq!(colorize("&zz"), "&zz");
    assert_eq!(colorize("trailing &"), "trailing &");
}

#[test]
fn test_strip_colors_removes_both_spellings() {
    assert_eq!(strip_colors("&cNo permission."), "No permission.");
    assert_eq!(strip_colors(&colorize("&7Economy: &fGold &7[Gold]")), "Economy: Gold [Gold]");
    assert_eq!(strip_colors("R&D"), "R&D");
}
