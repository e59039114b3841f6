/// 本次运行使用的渲染方式, 启动时确定一次
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Bitmap,
    Vector,
}

impl Strategy {
    /// 编译时带 `bitmap` feature 才有位图能力, 否则退回 SVG
    pub fn detect() -> Self {
        if cfg!(feature = "bitmap") { Strategy::Bitmap } else { Strategy::Vector }
    }
}
