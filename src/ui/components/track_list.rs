use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget},
};

use crate::{
    audio::state::PlaybackState,
    catalog::model::Track,
    ui::util::{get_active_track_icon, get_loading_track_icon},
    util::colors,
};

pub struct TrackList<'a> {
    tracks: &'a [Track],
    state: PlaybackState,
}

impl<'a> TrackList<'a> {
    pub fn new(tracks: &'a [Track], state: PlaybackState) -> Self {
        Self { tracks, state }
    }
}

impl<'a> StatefulWidget for TrackList<'a> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let items: Vec<ListItem> = self
            .tracks
            .iter()
            .map(|track| {
                let is_current = self.state.is_playing(track.id);
                let icon = if self.state.is_loading(track.id) {
                    get_loading_track_icon()
                } else {
                    get_active_track_icon(is_current)
                };

                let spans = vec![
                    Span::raw(format!("{icon} ")),
                    Span::raw(track.title.as_str()),
                    Span::styled(" - ", Style::default().fg(colors::NEUTRAL)),
                    Span::raw(track.artist.as_str()),
                    Span::styled(
                        format!("  {}", track.format_duration()),
                        Style::default().fg(colors::MUTED),
                    ),
                ];

                let mut item = ListItem::new(Line::from(spans));
                if is_current {
                    item = item.style(
                        Style::default()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, state);
    }
}
