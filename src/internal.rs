mod collector;
mod coordinator;
mod dispatcher;
mod worker;

pub(crate) use collector::Collector;
pub(crate) use coordinator::ShutdownCoordinator;
pub(crate) use dispatcher::Dispatcher;
pub(crate) use worker::Worker;
