use std::path::PathBuf;

use tabled::Table;

use crate::{
    error,
    types::{Song, SongTableRow},
};

pub async fn show(file: PathBuf) {
    let content = match async_fs::read_to_string(&file).await {
        Ok(content) => content,
        Err(e) => error!("Failed to read {}: {}", file.display(), e),
    };

    let songs: Vec<Song> = match serde_json::from_str(&content) {
        Ok(songs) => songs,
        Err(e) => error!("Failed to parse {}: {}", file.display(), e),
    };

    let table_rows: Vec<SongTableRow> = songs
        .into_iter()
        .map(|s| SongTableRow {
            id: s.id,
            track: s.track_name,
            artist: s.artist,
            album: s.album,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
