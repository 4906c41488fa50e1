#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const GALLERY_ITEMS: [GalleryItem; 6] = [
    GalleryItem {
        image: "/assets/gallery1.jpg",
        title: "Modern Fleet",
        category: "Vehicles",
        description: "Our premium shuttle bus fleet ready for service",
    },
    GalleryItem {
        image: "/assets/service4.jpg",
        title: "Airport Transfers",
        category: "Services",
        description: "Luxury airport transfer services",
    },
    GalleryItem {
        image: "/assets/gallery3.jpg",
        title: "Wine Tours",
        category: "Tours",
        description: "Unforgettable wine estate experiences",
    },
    GalleryItem {
        image: "/assets/gallery4.jpg",
        title: "Corporate Shuttles",
        category: "Business",
        description: "Professional corporate transport solutions",
    },
    GalleryItem {
        image: "/assets/gallery5.jpg",
        title: "Scenic Tours",
        category: "Tourism",
        description: "Breathtaking South African landscapes",
    },
    GalleryItem {
        image: "/assets/gallery.jpg",
        title: "VIP Service",
        category: "Luxury",
        description: "Executive private hire services",
    },
];
