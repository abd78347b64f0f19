//! Legacy layout: a flat type list per domain plus one interface named after
//! the domain, with a method per command (`name`) and event (`on<Name>`).

use super::{ANY_TYPE, Converted, Generator, naming};
use crate::ast::{Callable, Declaration, Interface, Method, Namespace, Parameter};
use crate::schema::{Command, Domain, Event};

pub fn convert_domain(generator: &Generator, domain: &Domain) -> Namespace {
    let mut namespace = Namespace::new(&domain.name, false, &domain.description);
    namespace.types = domain.types.iter().map(|t| generator.convert_type(t)).collect();

    let mut methods = Vec::with_capacity(domain.commands.len() + domain.events.len());
    for command in &domain.commands {
        let converted = convert_command(generator, command);
        namespace.types.extend(converted.types);
        methods.push(converted.member);
    }
    for event in &domain.events {
        let converted = convert_event(generator, event);
        namespace.types.extend(converted.types);
        methods.push(converted.member);
    }

    if !methods.is_empty() {
        let mut surface = Interface::new(
            &domain.name,
            format!("Commands and events belonging to the {} domain.", domain.name),
        );
        surface.callable = Callable::Methods(methods);
        namespace.types.push(surface.into());
    }
    namespace
}

/// Parameters are wrapped into `<Name>Params`; declared before the result.
pub fn convert_command(generator: &Generator, command: &Command) -> Converted<Method> {
    let mut types: Vec<Declaration> = Vec::new();
    let params = (!command.parameters.is_empty()).then(|| {
        let name = naming::params_type_name(&command.name);
        let comment = format!("Parameters passed to the '{}' command.", command.name);
        generator.object_interface(&name, &comment, &command.parameters)
    });
    let result = generator.result_interface(command);

    let return_type = result.as_ref().map_or(ANY_TYPE, |r| r.name.as_str());
    let mut member = Method::new(&command.name, return_type, &command.description);
    if let Some(params) = &params {
        member.parameters.push(Parameter::new("params", &params.name, false, ""));
    }

    types.extend(params.map(Into::into));
    types.extend(result.map(Into::into));
    Converted { member, types }
}

pub fn convert_event(generator: &Generator, event: &Event) -> Converted<Method> {
    let args = generator.event_args_interface(&event.name, &event.parameters);

    let mut member = Method::new(naming::event_handler_name(&event.name), ANY_TYPE, &event.description);
    if let Some(args) = &args {
        member.parameters.push(Parameter::new("params", &args.name, false, ""));
    }

    Converted { member, types: args.into_iter().map(Into::into).collect() }
}
