//! Event-driven reader that fills an [`Application`] from XML.
//!
//! Each open element pushes a [`Scope`] that knows which children it
//! recognises; the matching close pops it, restoring the parent. Unknown
//! elements push [`Context::Ignore`], which swallows everything beneath it.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use aml_model::{
    Application, Change, Comparison, FileMode, Group, Helper, Limit, ListOption, ParamType,
    Parameter, parse_bool,
};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::trace;

use crate::error::{Result, XmlError};

/// Parameter-level link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkList {
    Compare(Comparison),
    Exclude,
    Include,
}

/// Link list owned by a list option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionLinks {
    Exclude,
    Include,
}

/// Destination of a scalar element's character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    AppBrief,
    AppDescription,
    Category,
    ChangeDescription,
    ParamBrief,
    ParamDescription,
    ParamType,
    DefaultItem,
    InternalDefault,
    Count,
    Minimum,
    Maximum,
    Link(LinkList),
    Filter,
    DefaultPath,
    FileMode,
    PixelType,
    OptionBrief,
    OptionDescription,
    OptionLink(OptionLinks),
    HelperBrief,
    HelperDescription,
    HelperIcon,
    HelperFunction,
}

/// Structural element currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Document,
    Application,
    Category,
    History,
    Groups,
    Group,
    Parameter,
    Default,
    Links(LinkList),
    List,
    Option,
    OptionLinks(OptionLinks),
    Helpers,
    Helper,
    Ignore,
}

/// Character data collected for one scalar element.
#[derive(Debug)]
struct TextScope {
    field: Field,
    buffer: String,
    /// Inline markup elements currently open inside the scalar.
    depth: usize,
}

impl TextScope {
    fn new(field: Field) -> Self {
        Self {
            field,
            buffer: String::new(),
            depth: 0,
        }
    }

    fn open_markup(&mut self, name: &str, attributes: &str) {
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.buffer.push_str(attributes);
        self.buffer.push('>');
        self.depth += 1;
    }

    fn close_markup(&mut self, name: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(name);
        self.buffer.push('>');
        self.depth -= 1;
    }
}

#[derive(Debug)]
enum Scope {
    Element(Context),
    Text(TextScope),
}

pub(crate) struct ApplicationReader {
    path: PathBuf,
    app: Application,
    stack: Vec<Scope>,
    position: u64,
    seen_root: bool,
}

impl ApplicationReader {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            app: Application::default(),
            stack: vec![Scope::Element(Context::Document)],
            position: 0,
            seen_root: false,
        }
    }

    pub(crate) fn read(mut self, xml: &str) -> Result<Application> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().expand_empty_elements = true;

        loop {
            self.position = reader.buffer_position();
            match reader.read_event() {
                Ok(Event::Start(element)) => self.open(&element)?,
                Ok(Event::End(element)) => {
                    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    self.close(&name)?;
                }
                Ok(Event::Text(text)) => {
                    let text = text.decode().map_err(|err| self.malformed(err))?;
                    self.text(&text);
                }
                Ok(Event::CData(data)) => {
                    let text = data.decode().map_err(|err| self.malformed(err))?;
                    self.text(&text);
                }
                Ok(Event::GeneralRef(reference)) => {
                    let text = self.resolve_reference(&reference)?;
                    self.text(&text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    self.position = reader.error_position();
                    return Err(self.malformed(err));
                }
            }
        }

        if self.stack.len() > 1 {
            return Err(self.malformed("document ended inside an open element"));
        }
        if !self.seen_root {
            return Err(self.invalid("application", "missing <application> root element"));
        }
        Ok(self.app)
    }

    fn open(&mut self, element: &BytesStart<'_>) -> Result<()> {
        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
        let context = match self.stack.last_mut() {
            Some(Scope::Text(text)) => {
                let attributes = String::from_utf8_lossy(element.attributes_raw()).into_owned();
                text.open_markup(&name, &attributes);
                return Ok(());
            }
            Some(Scope::Element(context)) => *context,
            None => Context::Document,
        };
        let scope = self.child(context, &name, element)?;
        self.stack.push(scope);
        Ok(())
    }

    /// Scope for child `name` of an element in `context`.
    fn child(&mut self, context: Context, name: &str, element: &BytesStart<'_>) -> Result<Scope> {
        let text = |field: Field| -> Result<Scope> { Ok(Scope::Text(TextScope::new(field))) };
        let nested = |context: Context| -> Result<Scope> { Ok(Scope::Element(context)) };

        match (context, name) {
            (Context::Document, "application") => {
                self.app.name = self.attribute(element, "name")?.to_lowercase();
                self.seen_root = true;
                nested(Context::Application)
            }
            (Context::Application, "brief") => text(Field::AppBrief),
            (Context::Application, "description") => text(Field::AppDescription),
            (Context::Application, "category") => nested(Context::Category),
            (Context::Category, "item" | "categoryItem" | "missionItem") => text(Field::Category),
            (Context::Application, "history") => nested(Context::History),
            (Context::History, "change") => {
                let change = Change {
                    name: self.attribute(element, "name")?,
                    date: self.attribute(element, "date")?,
                    description: String::new(),
                };
                self.app.changes.push(change);
                text(Field::ChangeDescription)
            }
            (Context::Application, "groups") => nested(Context::Groups),
            (Context::Groups, "group") => {
                let group = Group::new(self.attribute(element, "name")?);
                self.app.groups.push(group);
                nested(Context::Group)
            }
            (Context::Group, "parameter") => {
                let param = Parameter::new(self.attribute(element, "name")?, ParamType::default());
                if let Some(group) = self.app.groups.last_mut() {
                    group.parameters.push(param);
                }
                nested(Context::Parameter)
            }

            (Context::Parameter, "brief") => text(Field::ParamBrief),
            (Context::Parameter, "description") => text(Field::ParamDescription),
            (Context::Parameter, "type") => text(Field::ParamType),
            (Context::Parameter, "default") => nested(Context::Default),
            (Context::Default, "item") => text(Field::DefaultItem),
            (Context::Parameter, "internalDefault") => text(Field::InternalDefault),
            (Context::Parameter, "count") => text(Field::Count),
            (Context::Parameter, "minimum") => {
                let limit = self.limit(element, name)?;
                self.with_parameter(|param| param.minimum = Some(limit));
                text(Field::Minimum)
            }
            (Context::Parameter, "maximum") => {
                let limit = self.limit(element, name)?;
                self.with_parameter(|param| param.maximum = Some(limit));
                text(Field::Maximum)
            }
            (Context::Parameter, "odd") => {
                self.with_parameter(|param| param.odd = true);
                nested(Context::Ignore)
            }
            (Context::Parameter, "greaterThan") => {
                nested(Context::Links(LinkList::Compare(Comparison::GreaterThan)))
            }
            (Context::Parameter, "greaterThanOrEqual") => {
                nested(Context::Links(LinkList::Compare(Comparison::GreaterThanOrEqual)))
            }
            (Context::Parameter, "lessThan") => {
                nested(Context::Links(LinkList::Compare(Comparison::LessThan)))
            }
            (Context::Parameter, "lessThanOrEqual") => {
                nested(Context::Links(LinkList::Compare(Comparison::LessThanOrEqual)))
            }
            (Context::Parameter, "notEqual") => {
                nested(Context::Links(LinkList::Compare(Comparison::NotEqual)))
            }
            (Context::Parameter, "exclusions") => nested(Context::Links(LinkList::Exclude)),
            (Context::Parameter, "inclusions") => nested(Context::Links(LinkList::Include)),
            (Context::Links(list), "item") => text(Field::Link(list)),
            (Context::Parameter, "filter") => text(Field::Filter),
            (Context::Parameter, "defaultPath") => text(Field::DefaultPath),
            (Context::Parameter, "fileMode") => text(Field::FileMode),
            (Context::Parameter, "pixelType") => text(Field::PixelType),

            (Context::Parameter, "list") => nested(Context::List),
            (Context::List, "option") => {
                let option = ListOption {
                    value: self.attribute(element, "value")?.to_uppercase(),
                    ..ListOption::default()
                };
                self.with_parameter(|param| param.list_options.push(option));
                nested(Context::Option)
            }
            (Context::Option, "brief") => text(Field::OptionBrief),
            (Context::Option, "description") => text(Field::OptionDescription),
            (Context::Option, "exclusions") => nested(Context::OptionLinks(OptionLinks::Exclude)),
            (Context::Option, "inclusions") => nested(Context::OptionLinks(OptionLinks::Include)),
            (Context::OptionLinks(list), "item") => text(Field::OptionLink(list)),

            (Context::Parameter, "helpers") => nested(Context::Helpers),
            (Context::Helpers, "helper") => {
                let helper = Helper {
                    name: self.attribute(element, "name")?,
                    ..Helper::default()
                };
                self.with_parameter(|param| param.helpers.push(helper));
                nested(Context::Helper)
            }
            (Context::Helper, "brief") => text(Field::HelperBrief),
            (Context::Helper, "description") => text(Field::HelperDescription),
            (Context::Helper, "icon") => text(Field::HelperIcon),
            (Context::Helper, "function") => text(Field::HelperFunction),

            _ => {
                if context != Context::Ignore {
                    trace!(element = name, ?context, "skipping unrecognised element");
                }
                nested(Context::Ignore)
            }
        }
    }

    fn close(&mut self, name: &str) -> Result<()> {
        if let Some(Scope::Text(text)) = self.stack.last_mut()
            && text.depth > 0
        {
            text.close_markup(name);
            return Ok(());
        }
        match self.stack.pop() {
            Some(Scope::Text(text)) => self.commit(text.field, text.buffer.trim()),
            Some(Scope::Element(_)) => Ok(()),
            None => Err(self.malformed(format!("unexpected closing tag </{name}>"))),
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(Scope::Text(scope)) = self.stack.last_mut() {
            scope.buffer.push_str(text);
        }
    }

    /// Store the trimmed character data of a finished scalar element.
    fn commit(&mut self, field: Field, value: &str) -> Result<()> {
        let value = value.to_string();
        match field {
            Field::AppBrief => self.app.brief = value,
            Field::AppDescription => self.app.description = value,
            Field::Category => self.app.categories.push(value),
            Field::ChangeDescription => {
                if let Some(change) = self.app.changes.last_mut() {
                    change.description = value;
                }
            }
            Field::ParamBrief => self.with_parameter(|param| param.brief = value),
            Field::ParamDescription => self.with_parameter(|param| param.description = value),
            Field::ParamType => {
                let param_type: ParamType =
                    value.parse().map_err(|err| self.invalid("type", err))?;
                self.with_parameter(|param| param.param_type = param_type);
            }
            Field::DefaultItem => self.with_parameter(|param| param.default_values.push(value)),
            Field::InternalDefault => self.with_parameter(|param| param.internal_default = value),
            Field::Count => self.with_parameter(|param| param.count = value),
            Field::Minimum => self.with_parameter(|param| {
                if let Some(limit) = param.minimum.as_mut() {
                    limit.value = value;
                }
            }),
            Field::Maximum => self.with_parameter(|param| {
                if let Some(limit) = param.maximum.as_mut() {
                    limit.value = value;
                }
            }),
            Field::Link(LinkList::Compare(comparison)) => {
                self.with_parameter(|param| param.comparisons_mut(comparison).push(value));
            }
            Field::Link(LinkList::Exclude) => self.with_parameter(|param| param.exclude.push(value)),
            Field::Link(LinkList::Include) => self.with_parameter(|param| param.include.push(value)),
            Field::Filter => self.with_parameter(|param| param.filter = value),
            Field::DefaultPath => self.with_parameter(|param| param.path = value),
            Field::FileMode => {
                let mode: FileMode = value.parse().map_err(|err| self.invalid("fileMode", err))?;
                self.with_parameter(|param| param.file_mode = mode);
            }
            Field::PixelType => self.with_parameter(|param| param.pixel_type = value),
            Field::OptionBrief => self.with_option(|option| option.brief = value),
            Field::OptionDescription => self.with_option(|option| option.description = value),
            Field::OptionLink(OptionLinks::Exclude) => {
                self.with_option(|option| option.exclude.push(value));
            }
            Field::OptionLink(OptionLinks::Include) => {
                self.with_option(|option| option.include.push(value));
            }
            Field::HelperBrief => self.with_helper(|helper| helper.brief = value),
            Field::HelperDescription => self.with_helper(|helper| helper.description = value),
            Field::HelperIcon => self.with_helper(|helper| helper.icon = value),
            Field::HelperFunction => self.with_helper(|helper| helper.function = value),
        }
        Ok(())
    }

    fn with_parameter(&mut self, update: impl FnOnce(&mut Parameter)) {
        if let Some(param) = self
            .app
            .groups
            .last_mut()
            .and_then(|group| group.parameters.last_mut())
        {
            update(param);
        }
    }

    fn with_option(&mut self, update: impl FnOnce(&mut ListOption)) {
        self.with_parameter(|param| {
            if let Some(option) = param.list_options.last_mut() {
                update(option);
            }
        });
    }

    fn with_helper(&mut self, update: impl FnOnce(&mut Helper)) {
        self.with_parameter(|param| {
            if let Some(helper) = param.helpers.last_mut() {
                update(helper);
            }
        });
    }

    /// Value of attribute `key`, or the empty string when absent.
    fn attribute(&self, element: &BytesStart<'_>, key: &str) -> Result<String> {
        for attribute in element.attributes() {
            let attribute = attribute.map_err(|err| self.malformed(err))?;
            if attribute.key.as_ref() == key.as_bytes() {
                let value = attribute
                    .unescape_value()
                    .map_err(|err| self.malformed(err))?;
                return Ok(value.into_owned());
            }
        }
        Ok(String::new())
    }

    /// Bound with its `inclusive` attribute; an absent attribute is exclusive.
    fn limit(&self, element: &BytesStart<'_>, name: &str) -> Result<Limit> {
        let inclusive = self.attribute(element, "inclusive")?.to_lowercase();
        let inclusive = parse_bool(&inclusive).map_err(|err| self.invalid(name, err))?;
        Ok(Limit {
            value: String::new(),
            inclusive,
        })
    }

    fn resolve_reference(&self, reference: &BytesRef<'_>) -> Result<String> {
        if let Some(ch) = reference
            .resolve_char_ref()
            .map_err(|err| self.malformed(err))?
        {
            return Ok(ch.to_string());
        }
        let entity = reference.decode().map_err(|err| self.malformed(err))?;
        resolve_predefined_entity(&entity)
            .map(str::to_string)
            .ok_or_else(|| self.malformed(format!("unknown entity &{entity};")))
    }

    fn malformed(&self, message: impl Display) -> XmlError {
        XmlError::Malformed {
            path: self.path.clone(),
            position: self.position,
            message: message.to_string(),
        }
    }

    fn invalid(&self, element: &str, message: impl Display) -> XmlError {
        XmlError::InvalidContent {
            path: self.path.clone(),
            element: element.to_string(),
            message: message.to_string(),
        }
    }
}
