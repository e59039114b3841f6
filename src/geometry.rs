#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    /// 圆周上的点也算在圆内
    pub fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// (min, max) 包围盒
    pub fn bounds(&self) -> (Point, Point) {
        (
            Point::new(self.center.x - self.radius, self.center.y - self.radius),
            Point::new(self.center.x + self.radius, self.center.y + self.radius),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    /// 叉积判断, 边上的点也算在内; 面积为零的三角形不包含任何点
    pub fn contains(&self, p: Point) -> bool {
        let [a, b, c] = self.0;
        if cross(b.x - a.x, b.y - a.y, c.x - a.x, c.y - a.y) == 0.0 {
            return false;
        }

        let c1 = cross(b.x - a.x, b.y - a.y, p.x - a.x, p.y - a.y);
        let c2 = cross(c.x - b.x, c.y - b.y, p.x - b.x, p.y - b.y);
        let c3 = cross(a.x - c.x, a.y - c.y, p.x - c.x, p.y - c.y);
        let has_neg = c1 < 0.0 || c2 < 0.0 || c3 < 0.0;
        let has_pos = c1 > 0.0 || c2 > 0.0 || c3 > 0.0;
        !(has_neg && has_pos)
    }
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

/// 图标的几何布局, 位图和 SVG 共用
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logo {
    pub size: u32,
    // 计算了但不参与绘制
    pub margin: u32,
    pub center: u32,
    pub outer_radius: u32,
    pub inner_radius: f32,
    pub play_size: u32,
}

impl Logo {
    pub fn for_size(size: u32) -> Self {
        let outer_radius = size / 3;
        Self {
            size,
            margin: size / 20,
            center: size / 2,
            outer_radius,
            inner_radius: outer_radius as f32 * 0.8,
            play_size: outer_radius / 3,
        }
    }

    pub fn outer_circle(&self) -> Circle {
        Circle {
            center: self.center_point(),
            radius: self.outer_radius as f32,
        }
    }

    pub fn inner_circle(&self) -> Circle {
        Circle {
            center: self.center_point(),
            radius: self.inner_radius,
        }
    }

    /// 播放三角形的整数顶点: 左上, 左下, 右中
    pub fn play_vertices(&self) -> [(i64, i64); 3] {
        let c = self.center as i64;
        let p = self.play_size as i64;
        let half = p / 2;
        [(c - half, c - p), (c - half, c + p), (c + half, c)]
    }

    pub fn play_triangle(&self) -> Triangle {
        Triangle(
            self.play_vertices()
                .map(|(x, y)| Point::new(x as f32, y as f32)),
        )
    }

    fn center_point(&self) -> Point {
        Point::new(self.center as f32, self.center as f32)
    }
}
