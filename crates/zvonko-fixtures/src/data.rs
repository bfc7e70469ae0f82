//! Datos de demostración del portal.

use std::collections::BTreeMap;

use zvonko_core::domain::{Artist, ArtistId, PlatformShare, Release, ReleaseId, ReleaseStatus, StatPoint};

const ALL_TERRITORIES: &str = "Все страны";

pub fn artist() -> Artist {
  let social_links = BTreeMap::from([
    ("instagram".to_string(), "@cvdence".to_string()),
    ("soundcloud".to_string(), "cvdence".to_string()),
  ]);

  Artist {
    id: ArtistId::new(1),
    name: "anwtb (cvdence Music)".to_string(),
    email: "cvdence@music.com".to_string(),
    avatar_url: "https://i.pravatar.cc/150?img=2".to_string(),
    bio: "Alternative electronic artist".to_string(),
    social_links,
  }
}

struct Seed {
  id: u64,
  title: &'static str,
  cover_seed: &'static str,
  upc: &'static str,
  release_date: &'static str,
  created_date: &'static str,
  platforms: &'static [&'static str],
  genre: &'static str,
  status: ReleaseStatus,
  artist_name: &'static str,
}

const RELEASES: [Seed; 4] = [
  Seed {
    id: 1,
    title: "comeback to me",
    cover_seed: "comeback",
    upc: "506383367981",
    release_date: "2025-11-07",
    created_date: "2025-10-29",
    platforms: &["Spotify", "Apple Music", "Deezer"],
    genre: "Electronic",
    status: ReleaseStatus::Published,
    artist_name: "NarGen_",
  },
  Seed {
    id: 2,
    title: "Dark Passenger",
    cover_seed: "dark",
    upc: "506383367912",
    release_date: "2025-11-07",
    created_date: "2025-10-29",
    platforms: &["Spotify", "Apple Music", "YouTube Music"],
    genre: "Phonk/Fonk",
    status: ReleaseStatus::Published,
    artist_name: "freakprod",
  },
  Seed {
    id: 3,
    title: "Night Drive",
    cover_seed: "night",
    upc: "506383367923",
    release_date: "2025-12-15",
    created_date: "2025-11-20",
    platforms: &["Spotify", "Apple Music"],
    genre: "Electronic",
    status: ReleaseStatus::Pending,
    artist_name: "NarGen_",
  },
  Seed {
    id: 4,
    title: "Urban Lights",
    cover_seed: "urban",
    upc: "506383367934",
    release_date: "2025-11-25",
    created_date: "2025-11-15",
    platforms: &["Spotify"],
    genre: "Electronic",
    status: ReleaseStatus::Moderation,
    artist_name: "cvdence Music",
  },
];

pub fn releases() -> Vec<Release> {
  RELEASES
    .iter()
    .map(|seed| Release {
      id: ReleaseId::new(seed.id),
      title: seed.title.to_string(),
      cover_url: format!("https://picsum.photos/seed/{}/400/400", seed.cover_seed),
      upc: seed.upc.to_string(),
      release_date: seed.release_date.to_string(),
      created_date: seed.created_date.to_string(),
      territories: ALL_TERRITORIES.to_string(),
      platforms: seed.platforms.iter().map(|p| p.to_string()).collect(),
      genre: seed.genre.to_string(),
      status: seed.status,
      artist_name: Some(seed.artist_name.to_string()),
    })
    .collect()
}

pub fn stats() -> Vec<StatPoint> {
  vec![
    StatPoint::new("2025-11-10", 1523, 45),
    StatPoint::new("2025-11-11", 1847, 52),
    StatPoint::new("2025-11-12", 2103, 61),
    StatPoint::new("2025-11-13", 2456, 73),
    StatPoint::new("2025-11-14", 2891, 89),
    StatPoint::new("2025-11-15", 3234, 102),
  ]
}

pub fn platform_shares() -> Vec<PlatformShare> {
  vec![
    PlatformShare::new("Spotify", 45, "#1DB954"),
    PlatformShare::new("Apple Music", 30, "#FA243C"),
    PlatformShare::new("YouTube Music", 15, "#FF0000"),
    PlatformShare::new("Deezer", 10, "#00C7F2"),
  ]
}
