//! Layered frame composition.
//!
//! A frame is built into a [`RenderRoot`]: the page body writes to the base
//! layer, and anything that must cover the page is written to a portal layer
//! attached at the root instead of being nested in the page's own output.
//! Portals are composited after the base layer, in the order they were
//! attached, so they are always drawn on top regardless of where in the page
//! they were requested from.
//!
//! Every write carries its own cursor position, so a layer never depends on
//! where a previous layer left the cursor.
//!
//! # Example
//!
//! ```rust
//! use concierge::ui::portal::RenderRoot;
//!
//! let mut root = RenderRoot::new(24, 80);
//! root.base().move_to(1, 1);
//! root.base().put("page");
//! root.portal("overlay").move_to(1, 1);
//! root.portal("overlay").put("over");
//!
//! let frame = root.finish();
//! assert!(frame.find("page") < frame.find("over"));
//! ```

/// An ordered buffer of positioned, styled output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layer {
    name: &'static str,
    buf: String,
}

impl Layer {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            buf: String::new(),
        }
    }

    /// Name the layer was attached under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Moves the cursor to a 1-indexed cell.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends text or an escape sequence at the cursor.
    pub fn put(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Output written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Whether nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// The root of one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRoot {
    rows: usize,
    cols: usize,
    base: Layer,
    portals: Vec<Layer>,
}

impl RenderRoot {
    /// Creates an empty root for a pane of `rows` x `cols`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            base: Layer::new("base"),
            portals: Vec::new(),
        }
    }

    /// Pane height.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Pane width.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The page body layer.
    pub fn base(&mut self) -> &mut Layer {
        &mut self.base
    }

    /// Returns the portal layer named `name`, attaching it at the root on
    /// first use.
    pub fn portal(&mut self, name: &'static str) -> &mut Layer {
        let index = match self.portals.iter().position(|layer| layer.name == name) {
            Some(index) => index,
            None => {
                self.portals.push(Layer::new(name));
                self.portals.len() - 1
            }
        };
        &mut self.portals[index]
    }

    /// Attached portal layers, bottom to top.
    #[must_use]
    pub fn portals(&self) -> &[Layer] {
        &self.portals
    }

    /// Number of attached portal layers.
    #[must_use]
    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }

    /// Composites the frame: the base layer first, then each portal.
    #[must_use]
    pub fn finish(self) -> String {
        let capacity = self.base.buf.len() + self.portals.iter().map(|l| l.buf.len()).sum::<usize>();
        let mut frame = String::with_capacity(capacity);

        frame.push_str(&self.base.buf);
        for layer in &self.portals {
            frame.push_str(&layer.buf);
        }
        frame
    }
}
