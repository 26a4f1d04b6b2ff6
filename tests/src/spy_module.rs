use std::slice::Iter;

use bullets_shared::{
    commands::Commands,
    events::Events,
    message_bus::{BusHandler, BusSender, MessageBus},
};

pub struct SpyResult {
    pub events: Vec<Events>,
    pub commands: Vec<Commands>,
}

struct Context {
    events: Vec<Events>,
    commands: Vec<Commands>,
    stop_event: Events,
    remaining: usize,
}

/// Records bus traffic and requests shutdown once `stop_event` (compared by
/// variant) has been seen the requested number of times.
pub struct SpyModule {
    result: SpyResult,
}

impl BusHandler<Context> for SpyModule {
    async fn event_handler(bus: &BusSender, context: &mut Context, event: Events) {
        let matched =
            std::mem::discriminant(&event) == std::mem::discriminant(&context.stop_event);

        context.events.push(event);

        if matched && context.remaining > 0 {
            context.remaining -= 1;

            if context.remaining == 0 {
                bus.send_cmd(Commands::Shutdown);
            }
        }
    }

    async fn command_handler(_bus: &BusSender, context: &mut Context, command: Commands) {
        context.commands.push(command);
    }
}

impl SpyModule {
    pub fn new() -> SpyModule {
        SpyModule {
            result: SpyResult {
                events: vec![],
                commands: vec![],
            },
        }
    }

    pub async fn start(&mut self, bus: MessageBus, stop_event: Events, occurrences: usize) {
        let context = Context {
            events: vec![],
            commands: vec![],
            stop_event,
            remaining: occurrences,
        };

        let context = MessageBus::handle::<Context, Self>(bus, context).await;

        self.result.events = context.events;
        self.result.commands = context.commands;
    }

    pub fn get_events(&self) -> Iter<Events> {
        self.result.events.iter()
    }

    pub fn get_commands(&self) -> Iter<Commands> {
        self.result.commands.iter()
    }
}
