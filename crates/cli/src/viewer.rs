use iced::widget::{column, image, row, text};
use iced::{Alignment, ContentFit, Element, Length, Task};

use blur_compare_core::display::domain::comparison_display::{ComparisonDisplay, Panel};
use blur_compare_core::shared::constants::{DISPLAY_CHANNEL_ORDER, WINDOW_TITLE};

const WINDOW_WIDTH: f32 = 1200.0;
const WINDOW_HEIGHT: f32 = 600.0;
const TITLE_SIZE: f32 = 18.0;

/// Shows the comparison in an iced window; `show` returns once it is closed.
pub struct IcedComparisonDisplay;

impl IcedComparisonDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IcedComparisonDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonDisplay for IcedComparisonDisplay {
    fn show(&mut self, left: Panel, right: Panel) -> Result<(), Box<dyn std::error::Error>> {
        let left = PanelView::from(left);
        let right = PanelView::from(right);

        iced::application(
            move || ComparisonWindow::new(left.clone(), right.clone()),
            ComparisonWindow::update,
            ComparisonWindow::view,
        )
        .title(WINDOW_TITLE)
        .window(iced::window::Settings {
            size: iced::Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            ..Default::default()
        })
        .run()?;
        Ok(())
    }
}

#[derive(Clone)]
struct PanelView {
    title: String,
    handle: image::Handle,
}

impl From<Panel> for PanelView {
    fn from(panel: Panel) -> Self {
        debug_assert_eq!(panel.frame.order(), DISPLAY_CHANNEL_ORDER);
        let (width, height) = (panel.frame.width(), panel.frame.height());
        Self {
            title: panel.title,
            handle: image::Handle::from_rgba(width, height, panel.frame.into_data()),
        }
    }
}

/// The window has nothing to react to besides being closed.
#[derive(Debug, Clone)]
enum Message {}

struct ComparisonWindow {
    left: PanelView,
    right: PanelView,
}

impl ComparisonWindow {
    fn new(left: PanelView, right: PanelView) -> (Self, Task<Message>) {
        (Self { left, right }, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {}
    }

    fn view(&self) -> Element<'_, Message> {
        row![panel_view(&self.left), panel_view(&self.right)]
            .spacing(16)
            .padding(16)
            .into()
    }
}

fn panel_view(panel: &PanelView) -> Element<'_, Message> {
    column![
        text(panel.title.as_str()).size(TITLE_SIZE),
        image(panel.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::FillPortion(1))
    .into()
}
