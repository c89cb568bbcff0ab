//! Candidate edge generation by Delaunay triangulation

use hashbrown::HashSet;

use crate::geometry::Point;

/// Turns a point set into candidate connectivity edges
///
/// Returned pairs are unordered, unique, and index into `points`.
pub trait Triangulator {
    fn triangulate(&self, points: &[Point]) -> Vec<[usize; 2]>;
}

/// Incremental Bowyer-Watson Delaunay triangulation
#[derive(Debug, Clone, Copy, Default)]
pub struct BowyerWatson;

#[derive(Debug, Clone, Copy)]
struct Triangle {
    v: [usize; 3],
    /// Circumcircle centre and squared radius
    cx: f64,
    cy: f64,
    r2: f64,
}

impl Triangle {
    fn new(v: [usize; 3], pts: &[(f64, f64)]) -> Self {
        let (ax, ay) = pts[v[0]];
        let (bx, by) = pts[v[1]];
        let (cx, cy) = pts[v[2]];
        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
        if d.abs() < f64::EPSILON {
            // Degenerate: every later point falls inside, so it gets replaced
            return Self {
                v,
                cx: 0.0,
                cy: 0.0,
                r2: f64::INFINITY,
            };
        }
        let a2 = ax * ax + ay * ay;
        let b2 = bx * bx + by * by;
        let c2 = cx * cx + cy * cy;
        let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
        let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;
        let r2 = (ax - ux) * (ax - ux) + (ay - uy) * (ay - uy);
        Self {
            v,
            cx: ux,
            cy: uy,
            r2,
        }
    }

    fn circumcircle_contains(&self, (x, y): (f64, f64)) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.r2
    }

    fn edges(&self) -> [[usize; 2]; 3] {
        [
            [self.v[0], self.v[1]],
            [self.v[1], self.v[2]],
            [self.v[2], self.v[0]],
        ]
    }
}

fn ordered([a, b]: [usize; 2]) -> [usize; 2] {
    if a <= b { [a, b] } else { [b, a] }
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

/// Add the shortest edge between two components until only one is left
fn connect_components(
    points: &[Point],
    edges: &mut Vec<[usize; 2]>,
    seen: &mut HashSet<[usize; 2]>,
) {
    let n = points.len();
    let mut parent: Vec<usize> = (0..n).collect();
    for &[a, b] in edges.iter() {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        parent[ra] = rb;
    }

    loop {
        let mut best: Option<(f32, [usize; 2])> = None;
        for i in 0..n {
            for j in (i + 1)..n {
                if find(&mut parent, i) == find(&mut parent, j) {
                    continue;
                }
                let d = points[i].distance(points[j]);
                if best.is_none_or(|(shortest, _)| d < shortest) {
                    best = Some((d, [i, j]));
                }
            }
        }

        let Some((_, [a, b])) = best else {
            break;
        };
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        parent[ra] = rb;
        if seen.insert([a, b]) {
            edges.push([a, b]);
        }
    }
}

impl Triangulator for BowyerWatson {
    fn triangulate(&self, points: &[Point]) -> Vec<[usize; 2]> {
        let n = points.len();
        if n < 2 {
            return Vec::new();
        }
        if n == 2 {
            return vec![[0, 1]];
        }

        let mut pts: Vec<(f64, f64)> = points.iter().map(|p| (p.x as f64, p.y as f64)).collect();

        // Super triangle well outside the bounding box
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &pts {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let span = (max_x - min_x).max(max_y - min_y).max(1.0) * 20.0;
        let mid_x = (min_x + max_x) / 2.0;
        let mid_y = (min_y + max_y) / 2.0;
        pts.push((mid_x - span, mid_y - span));
        pts.push((mid_x, mid_y + span));
        pts.push((mid_x + span, mid_y - span));

        let mut triangles = vec![Triangle::new([n, n + 1, n + 2], &pts)];

        for i in 0..n {
            let p = pts[i];
            let (bad, good): (Vec<Triangle>, Vec<Triangle>) = triangles
                .into_iter()
                .partition(|t| t.circumcircle_contains(p));
            triangles = good;

            // Boundary of the cavity: edges owned by exactly one bad triangle
            let mut boundary: Vec<[usize; 2]> = Vec::new();
            for (ti, t) in bad.iter().enumerate() {
                for edge in t.edges() {
                    let key = ordered(edge);
                    let shared = bad.iter().enumerate().any(|(tj, other)| {
                        tj != ti && other.edges().iter().any(|e| ordered(*e) == key)
                    });
                    if !shared {
                        boundary.push(edge);
                    }
                }
            }

            for [a, b] in boundary {
                triangles.push(Triangle::new([a, b, i], &pts));
            }
        }

        let mut seen: HashSet<[usize; 2]> = HashSet::new();
        let mut edges = Vec::new();
        for t in &triangles {
            if t.v.iter().any(|&v| v >= n) {
                continue;
            }
            for edge in t.edges() {
                let key = ordered(edge);
                if seen.insert(key) {
                    edges.push(key);
                }
            }
        }

        // Collinear input yields no real triangle, so the edge set can fall apart
        connect_components(points, &mut edges, &mut seen);

        edges
    }
}
