use tui_textarea::Input;

pub enum Event {
    AssistantReply(String),
    Notice(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLT(),
    KeyboardCTRLY(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
