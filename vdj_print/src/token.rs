//! Display tokens and their rendering to terminal text.

use bitflags::bitflags;
use ansi_escape::{
    emit_bold_escape, emit_eight_bit_color_escape, emit_end_escape, emit_red_escape,
};
use string_utils::{emit_reverse_escape, strme};

bitflags! {
    /// Visual markers carried by a token.  These are flags rather than
    /// wrappers, so marking a token twice is the same as marking it once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Markers: u8 {
        /// Differs from the germline base it was compared against.
        const MUTATION = 1;
        /// Inside a conserved codon.
        const CODON = 1 << 1;
        /// Stands in for a germline base the read does not have.
        const DELETION_FILLER = 1 << 2;
        /// Added so that the deletion labels fit between V and J.
        const GAP_FILLER = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayToken {
    pub base: u8,
    pub markers: Markers,
}

impl DisplayToken {
    pub fn plain(base: u8) -> Self {
        DisplayToken {
            base,
            markers: Markers::empty(),
        }
    }

    pub fn mutation(base: u8) -> Self {
        DisplayToken {
            base,
            markers: Markers::MUTATION,
        }
    }

    pub fn deletion_filler() -> Self {
        DisplayToken {
            base: b'*',
            markers: Markers::DELETION_FILLER,
        }
    }

    pub fn gap_filler() -> Self {
        DisplayToken {
            base: b'-',
            markers: Markers::GAP_FILLER,
        }
    }

    pub fn with_codon(self) -> Self {
        DisplayToken {
            markers: self.markers | Markers::CODON,
            ..self
        }
    }

    pub fn is_mutation(&self) -> bool {
        self.markers.contains(Markers::MUTATION)
    }

    pub fn is_codon(&self) -> bool {
        self.markers.contains(Markers::CODON)
    }

    pub fn is_filler(&self) -> bool {
        self.markers
            .intersects(Markers::DELETION_FILLER | Markers::GAP_FILLER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOpts {
    pub color: bool,
    pub deletion_filler: char,
    pub gap_filler: char,
}

impl Default for RenderOpts {
    fn default() -> Self {
        RenderOpts {
            color: true,
            deletion_filler: '*',
            gap_filler: '-',
        }
    }
}

/// Append one token to `log`.  Reverse video for the codon goes outside the
/// color, and a single reset closes both.
pub fn render_token(token: &DisplayToken, opts: &RenderOpts, log: &mut Vec<u8>) {
    let mut escaped = false;
    if opts.color {
        if token.is_codon() {
            emit_reverse_escape(log);
            escaped = true;
        }
        if token.markers.contains(Markers::MUTATION) {
            emit_red_escape(log);
            escaped = true;
        } else if token.markers.contains(Markers::DELETION_FILLER) {
            emit_bold_escape(log);
            emit_eight_bit_color_escape(log, 4);
            escaped = true;
        } else if token.markers.contains(Markers::GAP_FILLER) {
            emit_eight_bit_color_escape(log, 12);
            escaped = true;
        }
    }
    let c = if token.markers.contains(Markers::DELETION_FILLER) {
        opts.deletion_filler
    } else if token.markers.contains(Markers::GAP_FILLER) {
        opts.gap_filler
    } else {
        token.base as char
    };
    let mut buf = [0u8; 4];
    log.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    if escaped {
        emit_end_escape(log);
    }
}

pub fn render(tokens: &[DisplayToken], opts: &RenderOpts) -> String {
    let mut log = Vec::<u8>::with_capacity(tokens.len());
    for t in tokens {
        render_token(t, opts, &mut log);
    }
    strme(&log).to_string()
}
