//! JSON-lines sink standing in for the host shell.
use std::io::{self, Write};

use async_trait::async_trait;
use serde::Serialize;
use widget_core::{RenderedWidget, WidgetInstanceId};
use widget_runtime::{SinkError, WidgetSink};

/// One line of sink output.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum SinkEvent<'a> {
    Update { widget: &'a RenderedWidget },
    Removed { instance_id: WidgetInstanceId },
}

/// Writes every delivery as a single JSON object per line.
///
/// ```text
/// {"event":"update","widget":{"instance_id":1,"content":{...}}}
/// {"event":"removed","instance_id":1}
/// ```
pub struct JsonLinesSink<W> {
    writer: W,
}

impl JsonLinesSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &SinkEvent<'_>) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send> WidgetSink for JsonLinesSink<W> {
    async fn deliver(&mut self, widget: RenderedWidget) -> Result<(), SinkError> {
        self.write_event(&SinkEvent::Update { widget: &widget })
    }

    async fn remove(&mut self, instance: WidgetInstanceId) -> Result<(), SinkError> {
        self.write_event(&SinkEvent::Removed {
            instance_id: instance,
        })
    }
}
