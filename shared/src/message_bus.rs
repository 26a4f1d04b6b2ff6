use std::{any::type_name, future::Future, mem};

use log::{debug, error, info, warn};
use tokio::{
    select,
    sync::broadcast::{channel, error::RecvError, Receiver, Sender},
};

use crate::{commands::Commands, events::Events};

const COMMANDS_CAPACITY: usize = 20;
const EVENTS_CAPACITY: usize = 64;

pub struct BusSender {
    commands_sender: Sender<Commands>,
    events_sender: Sender<Events>,
}

/// Every clone subscribes when it is created, not when its handle loop starts.
pub struct MessageBus {
    sender: BusSender,
    commands_recv: Receiver<Commands>,
    events_recv: Receiver<Events>,
}

pub trait BusHandler<TContext> {
    fn event_handler(
        bus: &BusSender,
        context: &mut TContext,
        event: Events,
    ) -> impl Future<Output = ()> + Send;
    fn command_handler(
        bus: &BusSender,
        context: &mut TContext,
        command: Commands,
    ) -> impl Future<Output = ()> + Send;
}

enum LoopControl {
    Continue,
    Break,
}

impl Clone for MessageBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            commands_recv: self.sender.commands_sender.subscribe(),
            events_recv: self.sender.events_sender.subscribe(),
        }
    }
}

impl BusSender {
    pub fn send_cmd(&self, command: Commands) {
        if let Err(err) = self.commands_sender.send(command) {
            error!("no command receivers: {:?}", err.0);
        }
    }

    pub fn send_event(&self, event: Events) {
        if let Err(err) = self.events_sender.send(event) {
            error!("no event receivers: {:?}", err.0.as_ref());
        }
    }
}

impl Clone for BusSender {
    fn clone(&self) -> Self {
        Self {
            commands_sender: self.commands_sender.clone(),
            events_sender: self.events_sender.clone(),
        }
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBus {
    pub fn new() -> Self {
        let (commands_sender, commands_recv) = channel::<Commands>(COMMANDS_CAPACITY);
        let (events_sender, events_recv) = channel::<Events>(EVENTS_CAPACITY);

        Self {
            sender: BusSender {
                commands_sender,
                events_sender,
            },
            commands_recv,
            events_recv,
        }
    }

    pub fn sender(&self) -> BusSender {
        self.sender.clone()
    }

    pub fn split(self) -> (BusSender, Receiver<Commands>) {
        (self.sender, self.commands_recv)
    }

    pub async fn handle<TContext, THandler>(mut bus: MessageBus, mut context: TContext) -> TContext
    where
        THandler: BusHandler<TContext>,
    {
        let handler_type = type_name::<THandler>();

        debug!("context {} bytes", mem::size_of::<TContext>());

        info!("starting handle loop... {}", handler_type);

        loop {
            let control = Self::handle_command_or_event::<TContext, THandler>(
                &bus.sender,
                &mut bus.commands_recv,
                &mut bus.events_recv,
                &mut context,
                handler_type,
            )
            .await;

            if matches!(control, LoopControl::Break) {
                break;
            }
        }

        info!("done {}", handler_type);

        context
    }

    async fn handle_command_or_event<TContext, THandler>(
        sender: &BusSender,
        commands_receiver: &mut Receiver<Commands>,
        events_receiver: &mut Receiver<Events>,
        context: &mut TContext,
        handler_type: &str,
    ) -> LoopControl
    where
        THandler: BusHandler<TContext>,
    {
        select! {
            command_res = commands_receiver.recv() => {
                match command_res {
                    Ok(command) => {
                        let stop = matches!(command, Commands::Shutdown);

                        THandler::command_handler(sender, context, command).await;

                        if stop {
                            return LoopControl::Break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("{} skipped {} commands", handler_type, skipped);
                    }
                    Err(RecvError::Closed) => return LoopControl::Break,
                }
            }
            event_res = events_receiver.recv() => {
                match event_res {
                    Ok(event) => THandler::event_handler(sender, context, event).await,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("{} skipped {} events", handler_type, skipped);
                    }
                    Err(RecvError::Closed) => return LoopControl::Break,
                }
            }
        }

        LoopControl::Continue
    }

    /// Resolves once a shutdown command arrives; other commands are dropped.
    pub async fn wait_for_shutdown(commands_receiver: &mut Receiver<Commands>) {
        loop {
            match commands_receiver.recv().await {
                Ok(Commands::Shutdown) | Err(RecvError::Closed) => return,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("skipped {} commands while waiting for shutdown", skipped);
                }
            }
        }
    }

    pub fn send_cmd(&self, command: Commands) {
        self.sender.send_cmd(command);
    }

    pub fn send_event(&self, event: Events) {
        self.sender.send_event(event);
    }
}
