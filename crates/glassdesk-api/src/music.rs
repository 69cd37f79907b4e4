use axum::Json;

use glassdesk_types::models::Track;

/// The built-in catalog. Fixed content and order.
pub const CATALOG: [Track; 10] = [
    Track {
        id: 1,
        title: "Bohemian Rhapsody",
        author: "Queen",
        year: 1975,
        cover: "https://upload.wikimedia.org/wikipedia/en/9/9f/Bohemian_Rhapsody.png",
    },
    Track {
        id: 2,
        title: "Imagine",
        author: "John Lennon",
        year: 1971,
        cover: "https://i.scdn.co/image/ab67616d0000b27399581550ef9746ca582bb3cc",
    },
    Track {
        id: 3,
        title: "Smells Like Teen Spirit",
        author: "Nirvana",
        year: 1991,
        cover: "https://cdns-images.dzcdn.net/images/cover/fb71ce45bc9d3f2cb53977cf18d43b0a/1900x1900-000000-80-0-0.jpg",
    },
    Track {
        id: 4,
        title: "Billie Jean",
        author: "Michael Jackson",
        year: 1982,
        cover: "https://static.stereogum.com/uploads/2020/07/Michael-Jackson-Billie-Jean-1593711568.jpg",
    },
    Track {
        id: 5,
        title: "Hotel California",
        author: "Eagles",
        year: 1976,
        cover: "https://upload.wikimedia.org/wikipedia/en/4/49/Hotelcalifornia.jpg",
    },
    Track {
        id: 6,
        title: "Like a Rolling Stone",
        author: "Bob Dylan",
        year: 1965,
        cover: "https://i.discogs.com/UUUVx58Tc8vetBCbscjKdtF2l1kq_X-E6XRraWXeyYM/rs:fit/g:sm/q:40/h:300/w:300/czM6Ly9kaXNjb2dz/LWRhdGFiYXNlLWlt/YWdlcy9SLTIxNDc3/OTAtMTI2NjYxMTcw/MC5qcGVn.jpeg",
    },
    Track {
        id: 7,
        title: "What's Going On",
        author: "Marvin Gaye",
        year: 1971,
        cover: "https://upload.wikimedia.org/wikipedia/en/8/84/MarvinGayeWhat%27sGoingOnalbumcover.jpg",
    },
    Track {
        id: 8,
        title: "Purple Haze",
        author: "Jimi Hendrix",
        year: 1967,
        cover: "https://upload.wikimedia.org/wikipedia/en/9/9e/Jimi_Hendrix_-_Are_You_Experienced.jpg",
    },
    Track {
        id: 9,
        title: "Hey Jude",
        author: "The Beatles",
        year: 1968,
        cover: "https://upload.wikimedia.org/wikipedia/en/4/42/Hey_Jude_-_UK_single_cover.jpg",
    },
    Track {
        id: 10,
        title: "Stairway to Heaven",
        author: "Led Zeppelin",
        year: 1971,
        cover: "https://upload.wikimedia.org/wikipedia/en/2/26/Led_Zeppelin_-_Led_Zeppelin_IV.jpg",
    },
];

pub async fn list_music() -> Json<&'static [Track]> {
    Json(&CATALOG)
}
