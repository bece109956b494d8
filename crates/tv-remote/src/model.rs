/*
Tv 는 command 를 통해서만 바뀌는 상태를 가진다.

- 전원 on/off
- 현재 채널

"전원이 켜져 있을 때만 채널이 의미 있다" 는 조건은 여기서 강제하지 않는다.
 */

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tv {
    on: bool,
    channel: i32,
}

impl Tv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(channel: i32) -> Self {
        Self { on: false, channel }
    }

    pub fn switch_on(&mut self) {
        self.on = true;
    }

    pub fn switch_off(&mut self) {
        self.on = false;
    }

    pub fn switch_channel(&mut self, channel: i32) {
        self.channel = channel;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn channel(&self) -> i32 {
        self.channel
    }
}
