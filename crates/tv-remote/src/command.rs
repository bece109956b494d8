/*
이 파일은 다음 내용을 포함한다.

- Tv 를 조작하는 command 의 정의 (TvCommand)
- 각 command 는 execute / undo / redo 세 가지 동작만 가진다.

설계 원칙

- Command 는 Tv 를 소유하지 않는다. 호출할 때마다 &mut Tv 를 넘겨받는다.
- Undo 에 필요한 상태는 execute 시점에 command 안에 저장한다.
- 비슷한 command 는 새로 구현하지 않고 기존 command 에 위임한다. (PowerOff -> PowerOn)
 */

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::error::CommandError;
use crate::model::Tv;

pub trait TvCommand: Debug {
    fn execute(&mut self, tv: &mut Tv) -> Result<(), CommandError>;
    fn undo(&mut self, tv: &mut Tv) -> Result<(), CommandError>;
    fn redo(&mut self, tv: &mut Tv) -> Result<(), CommandError>;
}

/// Shared between the caller and whichever history stack currently holds it.
pub type CommandHandle = Rc<RefCell<dyn TvCommand>>;

pub fn handle<C: TvCommand + 'static>(command: C) -> CommandHandle {
    Rc::new(RefCell::new(command))
}

#[derive(Clone, Debug, Default)]
pub struct PowerOn;

impl TvCommand for PowerOn {
    fn execute(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        tv.switch_on();
        Ok(())
    }

    fn undo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        tv.switch_off();
        Ok(())
    }

    fn redo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        tv.switch_on();
        Ok(())
    }
}

// NOTE: PowerOn 을 뒤집어서 쓴다
#[derive(Clone, Debug, Default)]
pub struct PowerOff {
    power_on: PowerOn,
}

impl TvCommand for PowerOff {
    fn execute(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        self.power_on.undo(tv)
    }

    fn undo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        self.power_on.execute(tv)
    }

    fn redo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        self.power_on.undo(tv)
    }
}

#[derive(Clone, Debug)]
pub struct SetChannel {
    target: i32,
    previous: Option<i32>,
}

impl SetChannel {
    pub fn new(target: i32) -> Self {
        Self {
            target,
            previous: None,
        }
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    /// Channel captured by the last `execute`, if any.
    pub fn previous(&self) -> Option<i32> {
        self.previous
    }
}

impl TvCommand for SetChannel {
    fn execute(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        self.previous = Some(tv.channel());
        tv.switch_channel(self.target);
        Ok(())
    }

    fn undo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        let Some(previous) = self.previous else {
            return Err(CommandError::invalid_state(
                "SetChannel",
                "undo called before execute",
            ));
        };
        tv.switch_channel(previous);
        Ok(())
    }

    fn redo(&mut self, tv: &mut Tv) -> Result<(), CommandError> {
        tv.switch_channel(self.target);
        Ok(())
    }
}
