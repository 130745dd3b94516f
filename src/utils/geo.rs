/// 地球平均半径(公里)
const EARTH_RADIUS_KM: f64 = 6371.0088;

pub fn validate_coordinates(lat: f64, lon: f64) -> bool {
    lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon)
}

/// 两点间大圆距离(公里), haversine 公式
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// 以 (lat, lon) 为中心、半径 radius_km 的经纬度外接范围，用于先在数据库中粗筛
///
/// 跨越 ±180 经线时经度拆成两段；覆盖极点时经度不限。
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    /// 任一区间命中即可
    pub lon_ranges: Vec<(f64, f64)>,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && self
                .lon_ranges
                .iter()
                .any(|(lo, hi)| (*lo..=*hi).contains(&lon))
    }
}

pub fn bounding_box(lat: f64, lon: f64, radius_km: f64) -> BoundingBox {
    // 留 1% 余量，最终以 haversine 距离为准
    let radius_km = radius_km * 1.01;
    let d_lat = (radius_km / EARTH_RADIUS_KM).to_degrees();
    let min_lat = lat - d_lat;
    let max_lat = lat + d_lat;

    let cos_lat = lat.to_radians().cos().abs().max(1e-6);
    let d_lon = (radius_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees();

    let lon_ranges = if min_lat <= -90.0 || max_lat >= 90.0 || d_lon >= 180.0 {
        vec![(-180.0, 180.0)]
    } else {
        let (lo, hi) = (lon - d_lon, lon + d_lon);
        if lo < -180.0 {
            vec![(lo + 360.0, 180.0), (-180.0, hi)]
        } else if hi > 180.0 {
            vec![(lo, 180.0), (-180.0, hi - 360.0)]
        } else {
            vec![(lo, hi)]
        }
    };

    BoundingBox {
        min_lat: min_lat.max(-90.0),
        max_lat: max_lat.min(90.0),
        lon_ranges,
    }
}
