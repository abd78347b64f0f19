//! Each domain yields its raw types plus `Commands` and `Events`
//! sub-namespaces holding one call-signature interface per command/event.

use super::{ANY_TYPE, Converted, Generator};
use crate::ast::{CallSignature, Callable, Interface, Namespace, Parameter};
use crate::schema::{Command, Domain, Event};

pub const COMMANDS_NAMESPACE: &str = "Commands";
pub const EVENTS_NAMESPACE: &str = "Events";

pub fn convert_domain(generator: &Generator, domain: &Domain) -> Namespace {
    let mut namespace = Namespace::new(&domain.name, false, &domain.description);
    namespace.types = domain.types.iter().map(|t| generator.convert_type(t)).collect();

    let mut commands = Namespace::new(
        COMMANDS_NAMESPACE,
        false,
        format!("All commands belonging to the {} domain.", domain.name),
    );
    for command in &domain.commands {
        let converted = convert_command(generator, command);
        namespace.types.extend(converted.types);
        commands.types.push(converted.member.into());
    }

    let mut events = Namespace::new(
        EVENTS_NAMESPACE,
        false,
        format!("All events belonging to the {} domain.", domain.name),
    );
    for event in &domain.events {
        let converted = convert_event(generator, event);
        namespace.types.extend(converted.types);
        events.types.push(converted.member.into());
    }

    namespace.namespaces.push(commands);
    namespace.namespaces.push(events);
    namespace
}

/// Parameters are inlined positionally into the call signature.
pub fn convert_command(generator: &Generator, command: &Command) -> Converted<Interface> {
    let result = generator.result_interface(command);
    let return_type = result.as_ref().map_or(ANY_TYPE, |r| r.name.as_str());

    let mut signature = CallSignature::new(return_type, "");
    signature.parameters = command.parameters.iter().map(|p| generator.convert_parameter(p)).collect();

    let mut member = Interface::new(&command.name, &command.description);
    member.callable = Callable::Signature(signature);

    Converted { member, types: result.into_iter().map(Into::into).collect() }
}

/// Parameters always travel as a single `params: <Name>EventArgs` argument.
pub fn convert_event(generator: &Generator, event: &Event) -> Converted<Interface> {
    let args = generator.event_args_interface(&event.name, &event.parameters);

    let mut signature = CallSignature::new(ANY_TYPE, "");
    if let Some(args) = &args {
        signature.parameters.push(Parameter::new("params", &args.name, false, ""));
    }

    let mut member = Interface::new(&event.name, &event.description);
    member.callable = Callable::Signature(signature);

    Converted { member, types: args.into_iter().map(Into::into).collect() }
}
