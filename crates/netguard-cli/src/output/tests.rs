// Tests for report rendering and the output writer

use super::*;
use netguard_types::{AddressGroup, AddressGroupSpec, ObjectMeta};
use netguard_validation::{admit, AdmissionRequest, ValidationContext};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

/// Writer that keeps everything written for inspection
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, 0, Box::new(buffer.clone()));
    (writer, buffer)
}

fn group(name: &str, action: &str) -> AddressGroup {
    AddressGroup {
        metadata: ObjectMeta::named("default", name),
        spec: AddressGroupSpec {
            default_action: action.to_string(),
            ..Default::default()
        },
    }
}

fn sample_report() -> ValidationReport {
    let ctx = ValidationContext::default();
    let documents = vec![
        DocumentReport {
            index: 0,
            response: admit(&ctx, &AdmissionRequest::create(group("good", "ACCEPT"))),
        },
        DocumentReport {
            index: 1,
            response: admit(&ctx, &AdmissionRequest::create(group("bad", "INVALID"))),
        },
    ];
    ValidationReport::new("groups.yaml", Operation::Create, documents)
}

#[test]
fn test_report_counts() {
    let report = sample_report();
    assert_eq!(report.total, 2);
    assert_eq!(report.rejected, 1);
    assert!(!report.is_allowed());
}

#[test]
fn test_human_report() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.report(&sample_report()).unwrap();

    let expected = concat!(
        "✓ AddressGroup good (#0): allowed\n",
        "✗ AddressGroup bad (#1): rejected\n",
        "    spec.defaultAction: Unsupported value: \"INVALID\": supported values: \"ACCEPT\", \"DROP\"\n",
        "groups.yaml: CREATE 1 of 2 document(s) rejected\n",
    );
    assert_eq!(buffer.contents(), expected);
}

#[test]
fn test_quiet_human_report_only_shows_rejections() {
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    output.report(&sample_report()).unwrap();

    let contents = buffer.contents();
    assert!(!contents.contains("good"));
    assert!(contents.contains("✗ AddressGroup bad (#1): rejected"));
}

#[test]
fn test_json_report() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.report(&sample_report()).unwrap();

    let value: serde_json::Value = serde_json::from_str(buffer.contents().trim()).unwrap();
    assert_eq!(value["source"], "groups.yaml");
    assert_eq!(value["operation"], "CREATE");
    assert_eq!(value["rejected"], 1);
    assert_eq!(value["documents"][0]["allowed"], true);
    assert_eq!(value["documents"][1]["kind"], "AddressGroup");
    assert_eq!(value["documents"][1]["errors"][0]["path"], "spec.defaultAction");
    assert_eq!(value["documents"][1]["errors"][0]["kind"], "NotSupported");
}

#[test]
fn test_yaml_report() {
    let (mut output, buffer) = writer(OutputFormat::Yaml, false);
    output.report(&sample_report()).unwrap();

    let value: serde_yaml::Value = serde_yaml::from_str(&buffer.contents()).unwrap();
    assert_eq!(value["total"], serde_yaml::Value::from(2));
}

#[test]
fn test_info_is_suppressed_for_machine_formats() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.info("hello").unwrap();
    assert_eq!(buffer.contents(), "");

    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.info("hello").unwrap();
    output.warning("careful").unwrap();
    assert_eq!(buffer.contents(), "INFO: hello\nWARNING: careful\n");
}

#[test]
fn test_data_in_yaml() {
    let (mut output, buffer) = writer(OutputFormat::Yaml, false);
    output.data(&serde_json::json!({"a": 1})).unwrap();
    assert_eq!(buffer.contents(), "a: 1\n");
}
