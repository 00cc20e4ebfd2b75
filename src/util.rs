use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Can a terminal window of the given size show the whole game?
pub(crate) fn fits_display(size: Size) -> bool {
    size.width >= consts::DISPLAY_SIZE.width && size.height >= consts::DISPLAY_SIZE.height
}
