use std::collections::BTreeSet;

use config::constants::{BoxingConfig, COMMAND_ID, PANEL_ID};
use lens_boxing::command::{AddIn, CommandContext, CommandDefinition, HostUi, MessageSink, Selection};
use lens_boxing::curves::Ellipse;
use lens_boxing::reference::{DimensionOrientation, RecordingSink};
use lens_boxing::{BoxingResult, Point3};

#[derive(Default)]
struct Host {
    definitions: BTreeSet<String>,
    controls: BTreeSet<String>,
    messages: Vec<String>,
}

impl MessageSink for Host {
    fn message_box(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl HostUi for Host {
    fn has_command_definition(&self, id: &str) -> bool {
        self.definitions.contains(id)
    }

    fn add_button_definition(&mut self, definition: &CommandDefinition) -> BoxingResult<()> {
        self.definitions.insert(definition.id.clone());
        Ok(())
    }

    fn remove_command_definition(&mut self, id: &str) -> BoxingResult<bool> {
        Ok(self.definitions.remove(id))
    }

    fn has_panel(&self, panel_id: &str) -> bool {
        panel_id == PANEL_ID
    }

    fn panel_has_control(&self, _panel_id: &str, command_id: &str) -> bool {
        self.controls.contains(command_id)
    }

    fn add_panel_control(&mut self, _panel_id: &str, command_id: &str) -> BoxingResult<()> {
        self.controls.insert(command_id.to_string());
        Ok(())
    }

    fn remove_panel_control(&mut self, _panel_id: &str, command_id: &str) -> BoxingResult<bool> {
        Ok(self.controls.remove(command_id))
    }
}

#[test]
fn full_session_start_box_stop() {
    let mut host = Host::default();
    let mut addin = AddIn::new(BoxingConfig::default());
    addin.start(&mut host).unwrap();
    assert!(host.controls.contains(COMMAND_ID));

    let lens = Ellipse::new(Point3::new(25.0, 20.0, 0.0), 25.0, 20.0).unwrap();
    let selection = [Selection::Curve(&lens)];
    let mut sketch = RecordingSink::default();
    let mut messages = Host::default();
    let mut ctx = CommandContext {
        sketch: Some(&mut sketch),
        selection: &selection,
        messages: &mut messages,
    };
    addin.trigger(&mut ctx).unwrap();

    // Width label sits half a unit above the top edge.
    let width = sketch.dimensions[0];
    assert_eq!(width.orientation, DimensionOrientation::Horizontal);
    assert!((width.label.y - 40.5).abs() < 1e-9);

    let axis = sketch.lines[6];
    assert!((axis.start.distance(axis.end) - 50.0).abs() < 1e-9);
    assert_eq!(sketch.dimensions[2].orientation, DimensionOrientation::Aligned);
    assert!(messages.messages.is_empty());

    addin.stop(&mut host).unwrap();
    assert!(host.definitions.is_empty());
    assert!(host.controls.is_empty());
    assert!(host.messages.is_empty());
}

#[test]
fn no_sketch_message_reaches_user() {
    let mut host = Host::default();
    let mut addin = AddIn::new(BoxingConfig::default());
    addin.start(&mut host).unwrap();

    let mut messages = Host::default();
    let mut ctx = CommandContext {
        sketch: None,
        selection: &[],
        messages: &mut messages,
    };
    addin.trigger(&mut ctx).unwrap();
    assert_eq!(
        messages.messages,
        vec!["A sketch must be active. Please enter \"Edit Sketch\" mode.".to_string()]
    );
}

#[test]
fn custom_sample_count_is_honoured() {
    let config = BoxingConfig::new(4, 1.0).unwrap();
    let mut host = Host::default();
    let mut addin = AddIn::new(config);
    addin.start(&mut host).unwrap();

    let lens = Ellipse::new(Point3::ZERO, 30.0, 10.0).unwrap();
    let selection = [Selection::Curve(&lens)];
    let mut sketch = RecordingSink::default();
    let mut messages = Host::default();
    let mut ctx = CommandContext {
        sketch: Some(&mut sketch),
        selection: &selection,
        messages: &mut messages,
    };
    addin.trigger(&mut ctx).unwrap();

    // Height label uses the configured offset.
    assert!((sketch.dimensions[1].label.x - 31.0).abs() < 1e-9);
    assert_eq!(sketch.lines.len(), 7);
}
